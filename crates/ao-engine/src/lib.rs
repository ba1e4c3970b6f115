//! Organization suggestions for an app collection.
//!
//! Everything here is a pure function over an item snapshot: grouping added
//! apps by effective category, proposing folders with advisory tips,
//! partitioning folders across home screens, and rendering a shareable plan.
//! Callers pass in the slice they want organized (in practice the added
//! items); the engine never filters by the added flag and never mutates.

use std::collections::BTreeMap;

use ao_core::{AppItem, Category};

/// A proposed folder: the added items sharing one effective category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationSuggestion {
    /// Folder name, equal to the category display name.
    pub folder_name: String,
    /// The resolved category.
    pub category: Category,
    /// Member items, sorted by name.
    pub apps: Vec<AppItem>,
    /// Optional advisory tip for this folder.
    pub tip: Option<&'static str>,
}

/// A partition of suggested folders across home screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeScreenLayout {
    /// Folders recommended for the first home screen, at most four.
    pub primary_folders: Vec<OrganizationSuggestion>,
    /// Every remaining folder, in suggestion order.
    pub secondary_folders: Vec<OrganizationSuggestion>,
    /// Count of all input items, including any whose category did not
    /// resolve and therefore appears in no folder.
    pub total_apps: usize,
}

impl HomeScreenLayout {
    /// Human-readable summary of the layout.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self
            .primary_folders
            .iter()
            .map(|folder| folder.folder_name.as_str())
            .collect();
        format!(
            "Suggested Home Screen Layout:\n\
             - First screen: {} folders ({})\n\
             - Second screen: {} folders\n\
             - Total apps organized: {}",
            self.primary_folders.len(),
            names.join(", "),
            self.secondary_folders.len(),
            self.total_apps
        )
    }
}

/// Categories that earn a first-screen spot regardless of size.
const PRIMARY_CATEGORIES: [Category; 4] = [
    Category::SocialMedia,
    Category::Productivity,
    Category::Entertainment,
    Category::Utilities,
];

/// Group items by effective category and propose one folder per group.
///
/// Groups whose category name does not resolve in the taxonomy are silently
/// dropped; orphaned category strings are not an error. The result is
/// ordered by group size descending, with equal sizes falling back to
/// category name ascending.
pub fn generate_suggestions(items: &[AppItem]) -> Vec<OrganizationSuggestion> {
    let mut groups: BTreeMap<&str, Vec<AppItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.effective_category()).or_default().push(item.clone());
    }

    let mut suggestions: Vec<OrganizationSuggestion> = groups
        .into_iter()
        .filter_map(|(name, mut apps)| {
            let category = Category::from_name(name)?;
            apps.sort_by(|a, b| a.name.cmp(&b.name));
            let tip = generate_tip(category, apps.len());
            Some(OrganizationSuggestion {
                folder_name: name.to_string(),
                category,
                apps,
                tip,
            })
        })
        .collect();

    // Stable sort over the name-ascending BTreeMap order makes the
    // equal-size tie-break deterministic.
    suggestions.sort_by(|a, b| b.apps.len().cmp(&a.apps.len()));
    suggestions
}

fn generate_tip(category: Category, app_count: usize) -> Option<&'static str> {
    if app_count > 12 {
        return Some("Consider splitting into sub-folders for easier access");
    }

    match category {
        Category::SocialMedia => {
            (app_count > 5).then_some("Keep your most-used social apps on the home screen")
        }
        Category::Productivity => Some("Group work apps in one folder for focus time"),
        Category::Games => {
            (app_count > 8).then_some("Create separate folders for different game genres")
        }
        Category::Entertainment => Some("Keep streaming apps together for movie night"),
        Category::Finance => {
            Some("Consider a dedicated folder on the second home screen for privacy")
        }
        Category::HealthFitness => Some("Keep fitness apps accessible for daily routines"),
        _ => None,
    }
}

/// Partition the suggestions into a first home screen and the rest.
///
/// A folder is eligible for the first screen when its category is one of
/// the privileged set (Social Media, Productivity, Entertainment,
/// Utilities) or it holds at least five apps; the first four
/// eligible folders are taken in the established size order. Privilege only
/// filters, it never re-sorts.
pub fn suggest_home_screen_layout(items: &[AppItem]) -> HomeScreenLayout {
    let suggestions = generate_suggestions(items);

    let mut primary_folders = Vec::new();
    let mut secondary_folders = Vec::new();
    for suggestion in suggestions {
        let eligible = PRIMARY_CATEGORIES.contains(&suggestion.category)
            || suggestion.apps.len() >= 5;
        if eligible && primary_folders.len() < 4 {
            primary_folders.push(suggestion);
        } else {
            secondary_folders.push(suggestion);
        }
    }

    HomeScreenLayout {
        primary_folders,
        secondary_folders,
        total_apps: items.len(),
    }
}

/// Render the organization plan as shareable plain text.
///
/// Deterministic for identical input: groups sort by category name
/// ascending and apps by name. Groups with unresolvable categories still
/// get a block, but the folder count line only counts resolvable ones.
pub fn share_text(items: &[AppItem]) -> String {
    let mut groups: BTreeMap<&str, Vec<&AppItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.effective_category()).or_default().push(item);
    }
    let folder_count = groups
        .keys()
        .filter(|name| Category::from_name(name).is_some())
        .count();

    let mut text = String::from("My iPhone App Organization Plan\n");
    text.push_str("================================\n\n");
    text.push_str(&format!("Total Apps: {}\n", items.len()));
    text.push_str(&format!("Suggested Folders: {folder_count}\n\n"));

    for (name, mut apps) in groups {
        apps.sort_by(|a, b| a.name.cmp(&b.name));
        text.push_str(&format!("{} ({} apps)\n", name, apps.len()));
        for app in apps {
            text.push_str(&format!("  - {}\n", app.name));
        }
        text.push('\n');
    }

    text.push_str("\nGenerated with App Organizer");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(name: &str, category: &str) -> AppItem {
        AppItem::new(
            Uuid::new_v4(),
            name,
            format!("com.example.{}", name.to_lowercase().replace(' ', "")),
            "app.fill",
            category,
        )
        .unwrap()
    }

    fn items(counts: &[(&str, usize)]) -> Vec<AppItem> {
        let mut out = Vec::new();
        for (category, count) in counts {
            for index in 0..*count {
                out.push(item(&format!("{category} App {index:02}"), category));
            }
        }
        out
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(generate_suggestions(&[]).is_empty());
        let layout = suggest_home_screen_layout(&[]);
        assert!(layout.primary_folders.is_empty());
        assert!(layout.secondary_folders.is_empty());
        assert_eq!(layout.total_apps, 0);
    }

    #[test]
    fn unresolvable_categories_never_surface() {
        let snapshot = vec![
            item("Old Thing", "Legacy Category"),
            item("Spotify", "Music"),
        ];
        let suggestions = generate_suggestions(&snapshot);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, Category::Music);
    }

    #[test]
    fn suggestions_sort_by_size_descending() {
        let snapshot = items(&[("Music", 1), ("Games", 3), ("Travel", 2)]);
        let sizes: Vec<usize> = generate_suggestions(&snapshot)
            .iter()
            .map(|suggestion| suggestion.apps.len())
            .collect();
        assert_eq!(sizes, vec![3, 2, 1]);
    }

    #[test]
    fn equal_sizes_break_ties_by_name_ascending() {
        let snapshot = items(&[("Utilities", 2), ("Games", 2), ("Music", 2)]);
        let suggestions = generate_suggestions(&snapshot);
        let names: Vec<&str> = suggestions
            .iter()
            .map(|suggestion| suggestion.folder_name.as_str())
            .collect();
        assert_eq!(names, vec!["Games", "Music", "Utilities"]);
    }

    #[test]
    fn apps_within_a_group_sort_by_name() {
        let snapshot = vec![
            item("Zillow", "Lifestyle"),
            item("Pinterest", "Lifestyle"),
            item("Tinder", "Lifestyle"),
        ];
        let suggestions = generate_suggestions(&snapshot);
        let names: Vec<&str> = suggestions[0].apps.iter().map(|app| app.name.as_str()).collect();
        assert_eq!(names, vec!["Pinterest", "Tinder", "Zillow"]);
    }

    #[test]
    fn suggestions_respect_category_override() {
        let mut moved = item("Reddit", "News");
        moved.mark_added(chrono::Utc::now());
        moved.assign_category(Category::SocialMedia);
        let suggestions = generate_suggestions(&[moved]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, Category::SocialMedia);
    }

    #[test]
    fn generate_suggestions_is_idempotent() {
        let snapshot = items(&[("Games", 4), ("Finance", 2), ("Music", 2)]);
        let first = generate_suggestions(&snapshot);
        let second = generate_suggestions(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_group_tip_overrides_category_rules() {
        for category in ["Music", "Games", "Finance", "Shopping"] {
            let snapshot = items(&[(category, 13)]);
            let suggestions = generate_suggestions(&snapshot);
            assert_eq!(
                suggestions[0].tip,
                Some("Consider splitting into sub-folders for easier access"),
                "category {category}"
            );
        }
    }

    #[test]
    fn tip_rules_per_category() {
        let cases: [(&str, usize, Option<&str>); 8] = [
            ("Social Media", 5, None),
            ("Social Media", 6, Some("Keep your most-used social apps on the home screen")),
            ("Productivity", 1, Some("Group work apps in one folder for focus time")),
            ("Games", 8, None),
            ("Games", 9, Some("Create separate folders for different game genres")),
            ("Entertainment", 2, Some("Keep streaming apps together for movie night")),
            ("Health & Fitness", 1, Some("Keep fitness apps accessible for daily routines")),
            ("Shopping", 4, None),
        ];
        for (category, count, expected) in cases {
            let snapshot = items(&[(category, count)]);
            let suggestions = generate_suggestions(&snapshot);
            assert_eq!(suggestions[0].tip, expected, "{category} with {count} apps");
        }
    }

    #[test]
    fn finance_always_carries_the_privacy_tip() {
        let snapshot = items(&[("Finance", 1)]);
        assert_eq!(
            generate_suggestions(&snapshot)[0].tip,
            Some("Consider a dedicated folder on the second home screen for privacy")
        );
    }

    #[test]
    fn two_category_scenario() {
        let snapshot = vec![
            item("A", "Social Media"),
            item("B", "Social Media"),
            item("C", "Utilities"),
        ];
        let suggestions = generate_suggestions(&snapshot);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].folder_name, "Social Media");
        assert_eq!(suggestions[0].apps.len(), 2);
        assert_eq!(suggestions[0].tip, None);
        assert_eq!(suggestions[1].folder_name, "Utilities");
        assert_eq!(suggestions[1].apps.len(), 1);
        assert_eq!(suggestions[1].tip, None);
    }

    #[test]
    fn layout_primary_is_capped_at_four() {
        // Six eligible folders: four privileged plus two large ones.
        let snapshot = items(&[
            ("Social Media", 2),
            ("Productivity", 2),
            ("Entertainment", 2),
            ("Utilities", 2),
            ("Games", 6),
            ("Finance", 5),
        ]);
        let layout = suggest_home_screen_layout(&snapshot);
        assert_eq!(layout.primary_folders.len(), 4);
        assert_eq!(layout.secondary_folders.len(), 2);
    }

    #[test]
    fn layout_partition_is_exact_and_order_preserving() {
        let snapshot = items(&[
            ("Social Media", 3),
            ("Games", 7),
            ("Music", 2),
            ("Finance", 1),
        ]);
        let suggestions = generate_suggestions(&snapshot);
        let layout = suggest_home_screen_layout(&snapshot);

        let mut recombined: Vec<&str> = layout
            .primary_folders
            .iter()
            .chain(&layout.secondary_folders)
            .map(|folder| folder.folder_name.as_str())
            .collect();
        recombined.sort_unstable();
        let mut expected: Vec<&str> =
            suggestions.iter().map(|folder| folder.folder_name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(recombined, expected);

        // Games (7, eligible by size) outranks Social Media; both make the
        // first screen in size order, not privilege order.
        let primary: Vec<&str> = layout
            .primary_folders
            .iter()
            .map(|folder| folder.folder_name.as_str())
            .collect();
        assert_eq!(primary, vec!["Games", "Social Media"]);
        let secondary: Vec<&str> = layout
            .secondary_folders
            .iter()
            .map(|folder| folder.folder_name.as_str())
            .collect();
        assert_eq!(secondary, vec!["Music", "Finance"]);
    }

    #[test]
    fn layout_total_counts_unresolved_items_too() {
        let mut snapshot = items(&[("Music", 2)]);
        snapshot.push(item("Old Thing", "Legacy Category"));
        let layout = suggest_home_screen_layout(&snapshot);
        assert_eq!(layout.total_apps, 3);
        let folded: usize = layout
            .primary_folders
            .iter()
            .chain(&layout.secondary_folders)
            .map(|folder| folder.apps.len())
            .sum();
        assert_eq!(folded, 2);
    }

    #[test]
    fn layout_summary_lists_primary_folder_names() {
        let snapshot = items(&[("Social Media", 2), ("Music", 1)]);
        let summary = suggest_home_screen_layout(&snapshot).summary();
        assert!(summary.contains("First screen: 1 folders (Social Media)"));
        assert!(summary.contains("Second screen: 1 folders"));
        assert!(summary.contains("Total apps organized: 3"));
    }

    #[test]
    fn share_text_snapshot() {
        let snapshot = vec![
            item("Twitter", "Social Media"),
            item("Instagram", "Social Media"),
            item("Calculator", "Utilities"),
        ];
        insta::assert_snapshot!(share_text(&snapshot));
    }

    #[test]
    fn share_text_lists_unresolved_groups_but_does_not_count_them() {
        let snapshot = vec![item("Spotify", "Music"), item("Old Thing", "Legacy Category")];
        let text = share_text(&snapshot);
        assert!(text.contains("Total Apps: 2"));
        assert!(text.contains("Suggested Folders: 1"));
        assert!(text.contains("Legacy Category (1 apps)"));
    }

    #[test]
    fn share_text_is_deterministic() {
        let snapshot = items(&[("Games", 3), ("Travel", 2), ("News", 1)]);
        assert_eq!(share_text(&snapshot), share_text(&snapshot));
    }
}
