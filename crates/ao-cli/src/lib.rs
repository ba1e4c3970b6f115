use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use ao_core::{AppItem, Category, ItemRepository};
use ao_engine::{generate_suggestions, share_text, suggest_home_screen_layout};
use ao_store::{resolve_library_path, set_config_path, FsLibrary};

#[derive(Parser)]
#[command(name = "ao", version, about = "App Organizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize the library and seed the app catalog.
    Init {
        /// Optional path to initialize the library at.
        #[arg(long)]
        path: Option<String>,
    },
    /// Browse the app catalog.
    Browse {
        /// Only show apps in this category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        /// Only show apps whose name contains this text.
        #[arg(long)]
        query: Option<String>,
    },
    /// Add an app to your collection by name or bundle id.
    Add { name: String },
    /// Remove an app from your collection by name or bundle id.
    Remove { name: String },
    /// Assign a category to an added app.
    SetCategory {
        name: String,
        #[arg(value_enum)]
        category: CategoryArg,
    },
    /// List your added apps grouped by category.
    List,
    /// List every category in the taxonomy.
    Categories,
    /// Show folder suggestions for your added apps.
    Suggest,
    /// Show the suggested home screen layout.
    Layout,
    /// Print the shareable organization plan.
    Share {
        /// Write the plan to a file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Search the catalog by name.
    Search { query: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    SocialMedia,
    Productivity,
    Entertainment,
    Games,
    Finance,
    HealthFitness,
    Shopping,
    Travel,
    FoodDrink,
    Utilities,
    Education,
    News,
    Photography,
    Music,
    Lifestyle,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::SocialMedia => Category::SocialMedia,
            CategoryArg::Productivity => Category::Productivity,
            CategoryArg::Entertainment => Category::Entertainment,
            CategoryArg::Games => Category::Games,
            CategoryArg::Finance => Category::Finance,
            CategoryArg::HealthFitness => Category::HealthFitness,
            CategoryArg::Shopping => Category::Shopping,
            CategoryArg::Travel => Category::Travel,
            CategoryArg::FoodDrink => Category::FoodDrink,
            CategoryArg::Utilities => Category::Utilities,
            CategoryArg::Education => Category::Education,
            CategoryArg::News => Category::News,
            CategoryArg::Photography => Category::Photography,
            CategoryArg::Music => Category::Music,
            CategoryArg::Lifestyle => Category::Lifestyle,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(c) => c,
        None => return ao_tui::run(),
    };

    if let Command::Init { path } = &command {
        let path = path
            .clone()
            .map(std::path::PathBuf::from)
            .unwrap_or(FsLibrary::default_path()?);
        let library = FsLibrary::new(path.clone());
        library.init().context("failed to initialize library")?;
        library
            .seed_if_empty(ao_catalog::catalog())
            .context("failed to seed catalog")?;
        set_config_path(&path)?;
        println!("Library initialized at {}", path.display());
        return Ok(());
    }

    let library = FsLibrary::new(resolve_library_path()?);
    if !library.exists() {
        return Err(anyhow!(
            "App Organizer is not initialized. Run `ao init` to get started."
        ));
    }
    library
        .seed_if_empty(ao_catalog::catalog())
        .context("failed to seed catalog")?;

    match command {
        Command::Browse { category, query } => browse(&library, category, query),
        Command::Add { name } => add(&library, &name),
        Command::Remove { name } => remove(&library, &name),
        Command::SetCategory { name, category } => set_category(&library, &name, category.into()),
        Command::List => list(&library),
        Command::Categories => categories(),
        Command::Suggest => suggest(&library),
        Command::Layout => layout(&library),
        Command::Share { output } => share(&library, output.as_deref()),
        Command::Search { query } => search(&library, &query),
        Command::Init { .. } => unreachable!("handled above"),
    }
}

fn browse(library: &FsLibrary, category: Option<CategoryArg>, query: Option<String>) -> Result<()> {
    let mut items = match category {
        Some(category) => {
            let category: Category = category.into();
            library
                .fetch_by_category(category.name())
                .context("failed to load catalog")?
        }
        None => library.load_all().context("failed to load catalog")?,
    };
    if let Some(query) = query {
        let query = query.to_lowercase();
        items.retain(|item| item.name.to_lowercase().contains(&query));
    }
    items.sort_by(|a, b| a.name.cmp(&b.name));

    for item in items {
        let marker = if item.is_added { "[x]" } else { "[ ]" };
        println!("{marker}\t{}\t{}", item.name, item.default_category);
    }
    Ok(())
}

fn add(library: &FsLibrary, name: &str) -> Result<()> {
    let item = find_item(library, name)?;
    let item = library.add_app(item.id).context("failed to add app")?;
    println!("Added {} to your collection", item.name);
    Ok(())
}

fn remove(library: &FsLibrary, name: &str) -> Result<()> {
    let item = find_item(library, name)?;
    let item = library.remove_app(item.id).context("failed to remove app")?;
    println!("Removed {} from your collection", item.name);
    Ok(())
}

fn set_category(library: &FsLibrary, name: &str, category: Category) -> Result<()> {
    let item = find_item(library, name)?;
    if !item.is_added {
        return Err(anyhow!("{} is not in your collection", item.name));
    }
    let item = library
        .set_category(item.id, category)
        .context("failed to assign category")?;
    println!("Moved {} to {}", item.name, category.name());
    Ok(())
}

fn list(library: &FsLibrary) -> Result<()> {
    let added = library.fetch_added().context("failed to load collection")?;
    let mut groups: std::collections::BTreeMap<&str, Vec<&AppItem>> =
        std::collections::BTreeMap::new();
    for item in &added {
        groups.entry(item.effective_category()).or_default().push(item);
    }
    for (category, items) in groups {
        println!("{category} ({} apps)", items.len());
        for item in items {
            println!("  {}\t{}", item.name, item.bundle_id);
        }
    }
    Ok(())
}

fn categories() -> Result<()> {
    for category in Category::ALL {
        println!("{}\t{}\t{}", category.name(), category.icon(), category.color());
    }
    Ok(())
}

fn suggest(library: &FsLibrary) -> Result<()> {
    let added = library.fetch_added().context("failed to load collection")?;
    for suggestion in generate_suggestions(&added) {
        println!("{} ({} apps)", suggestion.folder_name, suggestion.apps.len());
        for app in &suggestion.apps {
            println!("  {}", app.name);
        }
        if let Some(tip) = suggestion.tip {
            println!("  tip: {tip}");
        }
    }
    Ok(())
}

fn layout(library: &FsLibrary) -> Result<()> {
    let added = library.fetch_added().context("failed to load collection")?;
    let layout = suggest_home_screen_layout(&added);
    println!("{}", layout.summary());
    Ok(())
}

fn share(library: &FsLibrary, output: Option<&str>) -> Result<()> {
    let added = library.fetch_added().context("failed to load collection")?;
    let text = share_text(&added);
    match output {
        Some(path) => {
            std::fs::write(path, text).context("failed to write plan")?;
            println!("Wrote organization plan to {path}");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn search(library: &FsLibrary, query: &str) -> Result<()> {
    for item in library.search(query).context("failed to search catalog")? {
        let marker = if item.is_added { "[x]" } else { "[ ]" };
        println!("{marker}\t{}\t{}", item.name, item.default_category);
    }
    Ok(())
}

/// Resolve an item by display name (case-insensitive), then by bundle id.
fn find_item(library: &FsLibrary, name: &str) -> Result<AppItem> {
    let items = library.load_all().context("failed to load catalog")?;
    let lowered = name.to_lowercase();
    items
        .iter()
        .find(|item| item.name.to_lowercase() == lowered)
        .or_else(|| items.iter().find(|item| item.bundle_id == name))
        .cloned()
        .ok_or_else(|| anyhow!("no app named {name} in the catalog"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_argument_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn category_args_cover_the_taxonomy() {
        let args = [
            CategoryArg::SocialMedia,
            CategoryArg::Productivity,
            CategoryArg::Entertainment,
            CategoryArg::Games,
            CategoryArg::Finance,
            CategoryArg::HealthFitness,
            CategoryArg::Shopping,
            CategoryArg::Travel,
            CategoryArg::FoodDrink,
            CategoryArg::Utilities,
            CategoryArg::Education,
            CategoryArg::News,
            CategoryArg::Photography,
            CategoryArg::Music,
            CategoryArg::Lifestyle,
        ];
        let mapped: Vec<Category> = args.into_iter().map(Category::from).collect();
        assert_eq!(mapped, Category::ALL.to_vec());
    }
}
