//! Filesystem-backed persistence for the App Organizer library.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ao_core::{AppFolder, AppItem, Category, CatalogApp, CoreError, CoreResult, ItemRepository};

/// Default directory name for the library.
pub const LIBRARY_DIR_NAME: &str = "app-organizer";

const CONFIG_FILE_NAME: &str = "config.yaml";
const LIBRARY_FILE_NAME: &str = "library.yaml";
const FOLDERS_FILE_NAME: &str = "folders.yaml";

/// Filesystem-backed item and folder store.
///
/// The whole collection lives in two YAML snapshot files under the root;
/// every mutation loads the snapshot, applies one state transition, and
/// writes it back.
#[derive(Debug, Clone)]
pub struct FsLibrary {
    root: PathBuf,
}

impl FsLibrary {
    /// Create a new library rooted at the provided path.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the root path of the library.
    pub fn path(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve the default library path (~/.app-organizer).
    pub fn default_path() -> CoreResult<PathBuf> {
        if let Some(dir) = dirs::home_dir() {
            return Ok(dir.join(format!(".{LIBRARY_DIR_NAME}")));
        }
        Err(CoreError::Storage(
            "unable to determine a default library path".into(),
        ))
    }

    /// Check if the library exists at the root path.
    pub fn exists(&self) -> bool {
        self.root.exists() && self.library_path().exists()
    }

    /// Initialize the library structure with an empty item snapshot.
    pub fn init(&self) -> CoreResult<()> {
        if self.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.root).map_err(|err| CoreError::Storage(err.to_string()))?;
        self.save_all(&[])?;
        Ok(())
    }

    fn library_path(&self) -> PathBuf {
        self.root.join(LIBRARY_FILE_NAME)
    }

    fn folders_path(&self) -> PathBuf {
        self.root.join(FOLDERS_FILE_NAME)
    }

    /// Added items, sorted by name.
    pub fn fetch_added(&self) -> CoreResult<Vec<AppItem>> {
        let mut items: Vec<AppItem> = self
            .load_all()?
            .into_iter()
            .filter(|item| item.is_added)
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Items whose default category matches, sorted by name.
    pub fn fetch_by_category(&self, category: &str) -> CoreResult<Vec<AppItem>> {
        let mut items: Vec<AppItem> = self
            .load_all()?
            .into_iter()
            .filter(|item| item.default_category == category)
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Items whose name contains the query, case-insensitive, sorted by name.
    pub fn search(&self, query: &str) -> CoreResult<Vec<AppItem>> {
        let query = query.to_lowercase();
        let mut items: Vec<AppItem> = self
            .load_all()?
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Add an item to the collection, stamping the added time.
    pub fn add_app(&self, id: Uuid) -> CoreResult<AppItem> {
        self.with_item(id, |item| item.mark_added(Utc::now()))
    }

    /// Remove an item from the collection, clearing timestamp and override.
    pub fn remove_app(&self, id: Uuid) -> CoreResult<AppItem> {
        self.with_item(id, AppItem::mark_removed)
    }

    /// Assign a category override to an item.
    pub fn set_category(&self, id: Uuid, category: Category) -> CoreResult<AppItem> {
        self.with_item(id, |item| item.assign_category(category))
    }

    fn with_item(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut AppItem),
    ) -> CoreResult<AppItem> {
        let mut items = self.load_all()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::Storage(format!("no item with id {id}")))?;
        apply(item);
        let updated = item.clone();
        self.save_all(&items)?;
        Ok(updated)
    }

    /// Load all folders from disk.
    pub fn load_folders(&self) -> CoreResult<Vec<AppFolder>> {
        let path = self.folders_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents =
            fs::read_to_string(&path).map_err(|err| CoreError::Storage(err.to_string()))?;
        serde_yaml::from_str(&contents).map_err(|err| CoreError::Storage(err.to_string()))
    }

    /// Persist the folder list to disk.
    pub fn save_folders(&self, folders: &[AppFolder]) -> CoreResult<()> {
        let contents = serde_yaml::to_string(folders)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        fs::write(self.folders_path(), contents)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        Ok(())
    }

    /// Remove a folder record. Items referenced by the folder are untouched.
    pub fn remove_folder(&self, id: Uuid) -> CoreResult<()> {
        let mut folders = self.load_folders()?;
        folders.retain(|folder| folder.id != id);
        self.save_folders(&folders)
    }
}

impl ItemRepository for FsLibrary {
    fn load_all(&self) -> CoreResult<Vec<AppItem>> {
        let path = self.library_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents =
            fs::read_to_string(&path).map_err(|err| CoreError::Storage(err.to_string()))?;
        serde_yaml::from_str(&contents).map_err(|err| CoreError::Storage(err.to_string()))
    }

    fn save_all(&self, items: &[AppItem]) -> CoreResult<()> {
        let contents =
            serde_yaml::to_string(items).map_err(|err| CoreError::Storage(err.to_string()))?;
        fs::write(self.library_path(), contents)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        Ok(())
    }

    fn seed_if_empty(&self, catalog: &[CatalogApp]) -> CoreResult<()> {
        if !self.load_all()?.is_empty() {
            return Ok(());
        }
        let items = catalog
            .iter()
            .map(|app| {
                AppItem::new(Uuid::new_v4(), app.name, app.bundle_id, app.icon, app.category)
            })
            .collect::<CoreResult<Vec<_>>>()?;
        self.save_all(&items)
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    path: Option<String>,
}

fn config_path() -> CoreResult<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        return Ok(dir.join(LIBRARY_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    Err(CoreError::Storage(
        "unable to determine config directory".into(),
    ))
}

pub fn load_config() -> CoreResult<LibraryConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(LibraryConfig::default());
    }
    let contents = fs::read_to_string(&path).map_err(|err| CoreError::Storage(err.to_string()))?;
    serde_yaml::from_str(&contents).map_err(|err| CoreError::Storage(err.to_string()))
}

pub fn save_config(config: &LibraryConfig) -> CoreResult<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| CoreError::Storage(err.to_string()))?;
    }
    let contents =
        serde_yaml::to_string(config).map_err(|err| CoreError::Storage(err.to_string()))?;
    fs::write(path, contents).map_err(|err| CoreError::Storage(err.to_string()))?;
    Ok(())
}

pub fn set_config_path(path: &std::path::Path) -> CoreResult<()> {
    let config = LibraryConfig {
        path: Some(path.to_string_lossy().to_string()),
    };
    save_config(&config)
}

pub fn resolve_library_path() -> CoreResult<PathBuf> {
    if let Ok(value) = std::env::var("APP_ORGANIZER_PATH") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    let config = load_config()?;
    if let Some(path) = config.path {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    FsLibrary::default_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library() -> (TempDir, FsLibrary) {
        let temp = TempDir::new().expect("temp dir");
        let library = FsLibrary::new(temp.path().join("library"));
        library.init().expect("init library");
        (temp, library)
    }

    #[test]
    fn init_is_idempotent() {
        let (_temp, library) = library();
        assert!(library.exists());
        library.init().expect("second init");
        assert!(library.load_all().expect("load").is_empty());
    }

    #[test]
    fn seed_fires_only_on_an_empty_store() {
        let (_temp, library) = library();
        library.seed_if_empty(ao_catalog::catalog()).expect("seed");
        let items = library.load_all().expect("load");
        assert_eq!(items.len(), ao_catalog::catalog().len());
        assert!(items.iter().all(|item| !item.is_added));

        // A second seed must not duplicate or reset anything.
        library.add_app(items[0].id).expect("add");
        library.seed_if_empty(ao_catalog::catalog()).expect("reseed");
        let after = library.load_all().expect("reload");
        assert_eq!(after.len(), items.len());
        assert!(after.iter().any(|item| item.is_added));
    }

    #[test]
    fn round_trip_preserves_items() {
        let (_temp, library) = library();
        let mut item = AppItem::new(
            Uuid::new_v4(),
            "Spotify",
            "com.spotify.ios",
            "music.note",
            "Music",
        )
        .unwrap();
        item.mark_added(Utc::now());
        item.assign_category(Category::Entertainment);
        library.save_all(std::slice::from_ref(&item)).expect("save");
        let loaded = library.load_all().expect("load");
        assert_eq!(loaded, vec![item]);
    }

    #[test]
    fn add_remove_transitions_persist() {
        let (_temp, library) = library();
        library.seed_if_empty(ao_catalog::catalog()).expect("seed");
        let id = library.load_all().expect("load")[0].id;

        let added = library.add_app(id).expect("add");
        assert!(added.is_added);
        assert!(added.date_added.is_some());

        library.set_category(id, Category::Lifestyle).expect("set category");
        let removed = library.remove_app(id).expect("remove");
        assert!(!removed.is_added);
        assert!(removed.date_added.is_none());
        assert!(removed.user_category.is_none());
    }

    #[test]
    fn unknown_id_is_a_storage_error() {
        let (_temp, library) = library();
        let result = library.add_app(Uuid::new_v4());
        assert!(matches!(result, Err(CoreError::Storage(_))));
    }

    #[test]
    fn queries_filter_and_sort_by_name() {
        let (_temp, library) = library();
        library.seed_if_empty(ao_catalog::catalog()).expect("seed");
        let items = library.load_all().expect("load");
        let spotify = items.iter().find(|item| item.name == "Spotify").unwrap();
        let shazam = items.iter().find(|item| item.name == "Shazam").unwrap();
        library.add_app(spotify.id).expect("add");
        library.add_app(shazam.id).expect("add");

        let added = library.fetch_added().expect("added");
        let names: Vec<&str> = added.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Shazam", "Spotify"]);

        let music = library.fetch_by_category("Music").expect("by category");
        assert!(music.iter().all(|item| item.default_category == "Music"));
        assert!(music.len() >= 2);

        let hits = library.search("SPOT").expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Spotify");
    }

    #[test]
    fn removing_a_folder_leaves_items_alone() {
        let (_temp, library) = library();
        library.seed_if_empty(ao_catalog::catalog()).expect("seed");
        let items = library.load_all().expect("load");

        let mut folder =
            AppFolder::new(Uuid::new_v4(), "Morning", "#FF8800", 0).expect("folder");
        folder.app_ids.push(items[0].id);
        library.save_folders(std::slice::from_ref(&folder)).expect("save folders");

        library.remove_folder(folder.id).expect("remove folder");
        assert!(library.load_folders().expect("folders").is_empty());
        assert_eq!(library.load_all().expect("items").len(), items.len());
    }
}
