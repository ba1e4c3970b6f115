//! Core domain entities, taxonomy, and traits for App Organizer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors returned by core validation and domain rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Returned when a validation rule is violated.
    #[error("validation error: {0}")]
    Validation(String),
    /// Returned when repository operations fail.
    #[error("storage error: {0}")]
    Storage(String),
}

/// The closed set of categories apps can belong to.
///
/// The set is fixed and process-wide; user-assigned categories are always
/// drawn from it, while an item's default category is an unvalidated string
/// that may or may not resolve here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
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

impl Category {
    /// Every category in stable declaration order.
    pub const ALL: [Category; 15] = [
        Category::SocialMedia,
        Category::Productivity,
        Category::Entertainment,
        Category::Games,
        Category::Finance,
        Category::HealthFitness,
        Category::Shopping,
        Category::Travel,
        Category::FoodDrink,
        Category::Utilities,
        Category::Education,
        Category::News,
        Category::Photography,
        Category::Music,
        Category::Lifestyle,
    ];

    /// The display name, used as the unique key in item records.
    pub fn name(self) -> &'static str {
        match self {
            Category::SocialMedia => "Social Media",
            Category::Productivity => "Productivity",
            Category::Entertainment => "Entertainment",
            Category::Games => "Games",
            Category::Finance => "Finance",
            Category::HealthFitness => "Health & Fitness",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::FoodDrink => "Food & Drink",
            Category::Utilities => "Utilities",
            Category::Education => "Education",
            Category::News => "News",
            Category::Photography => "Photography",
            Category::Music => "Music",
            Category::Lifestyle => "Lifestyle",
        }
    }

    /// Opaque icon reference for presentation layers.
    pub fn icon(self) -> &'static str {
        match self {
            Category::SocialMedia => "bubble.left.and.bubble.right.fill",
            Category::Productivity => "checkmark.circle.fill",
            Category::Entertainment => "tv.fill",
            Category::Games => "gamecontroller.fill",
            Category::Finance => "dollarsign.circle.fill",
            Category::HealthFitness => "heart.fill",
            Category::Shopping => "cart.fill",
            Category::Travel => "airplane",
            Category::FoodDrink => "fork.knife",
            Category::Utilities => "wrench.and.screwdriver.fill",
            Category::Education => "book.fill",
            Category::News => "newspaper.fill",
            Category::Photography => "camera.fill",
            Category::Music => "music.note",
            Category::Lifestyle => "star.fill",
        }
    }

    /// Opaque color reference for presentation layers.
    pub fn color(self) -> &'static str {
        match self {
            Category::SocialMedia => "blue",
            Category::Productivity => "orange",
            Category::Entertainment => "purple",
            Category::Games => "red",
            Category::Finance => "green",
            Category::HealthFitness => "pink",
            Category::Shopping => "yellow",
            Category::Travel => "cyan",
            Category::FoodDrink => "orange",
            Category::Utilities => "gray",
            Category::Education => "indigo",
            Category::News => "red",
            Category::Photography => "purple",
            Category::Music => "pink",
            Category::Lifestyle => "mint",
        }
    }

    /// Resolve a display name against the taxonomy.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.name() == name)
    }
}

/// A catalog entry: one known application, added to the collection or not.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppItem {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Opaque package/bundle identifier.
    pub bundle_id: String,
    /// Opaque icon reference.
    pub icon_name: String,
    /// Default category name from the catalog; not validated against the
    /// taxonomy.
    pub default_category: String,
    /// Whether the user has added the item to their collection.
    pub is_added: bool,
    /// Optional user-assigned category override; always a taxonomy name.
    pub user_category: Option<String>,
    /// Set iff `is_added` is true, to the moment it became true.
    pub date_added: Option<DateTime<Utc>>,
}

impl AppItem {
    /// Create a new item as seeded from the catalog: not added, no override.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        bundle_id: impl Into<String>,
        icon_name: impl Into<String>,
        default_category: impl Into<String>,
    ) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("name cannot be empty".into()));
        }
        let bundle_id = bundle_id.into();
        if bundle_id.trim().is_empty() {
            return Err(CoreError::Validation("bundle id cannot be empty".into()));
        }

        Ok(Self {
            id,
            name,
            bundle_id,
            icon_name: icon_name.into(),
            default_category: default_category.into(),
            is_added: false,
            user_category: None,
            date_added: None,
        })
    }

    /// The user-assigned category if present, else the default category.
    pub fn effective_category(&self) -> &str {
        self.user_category.as_deref().unwrap_or(&self.default_category)
    }

    /// Add the item to the collection, stamping the added time.
    ///
    /// A no-op when the item is already added; the timestamp records the
    /// moment the flag first became true and is not refreshed.
    pub fn mark_added(&mut self, at: DateTime<Utc>) {
        if !self.is_added {
            self.is_added = true;
            self.date_added = Some(at);
        }
    }

    /// Remove the item from the collection, clearing the timestamp and any
    /// category override in the same step.
    pub fn mark_removed(&mut self) {
        self.is_added = false;
        self.date_added = None;
        self.user_category = None;
    }

    /// Assign a category override. Taking a [`Category`] keeps overrides
    /// inside the taxonomy.
    pub fn assign_category(&mut self, category: Category) {
        self.user_category = Some(category.name().to_string());
    }
}

/// A user-defined named folder grouping items.
///
/// Folders have an independent lifecycle; removing one never touches the
/// items it referenced.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppFolder {
    /// Unique identifier for the folder.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Folder color as a hex string.
    pub color_hex: String,
    /// Ordering index among folders.
    pub order: i64,
    /// Member item ids.
    pub app_ids: Vec<Uuid>,
}

impl AppFolder {
    /// Create a new folder, rejecting an empty name.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        color_hex: impl Into<String>,
        order: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("folder name cannot be empty".into()));
        }
        Ok(Self {
            id,
            name,
            color_hex: color_hex.into(),
            order,
            app_ids: Vec::new(),
        })
    }
}

/// One row of the static seed catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogApp {
    /// Display name.
    pub name: &'static str,
    /// Opaque bundle identifier.
    pub bundle_id: &'static str,
    /// Opaque icon reference.
    pub icon: &'static str,
    /// Default category display name.
    pub category: &'static str,
}

/// Repository abstraction for reading and writing the item collection.
pub trait ItemRepository {
    /// Load the full item snapshot.
    fn load_all(&self) -> CoreResult<Vec<AppItem>>;
    /// Persist the full item snapshot.
    fn save_all(&self, items: &[AppItem]) -> CoreResult<()>;
    /// Populate the store from the catalog, only when it holds no items.
    fn seed_if_empty(&self, catalog: &[CatalogApp]) -> CoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> AppItem {
        AppItem::new(
            Uuid::new_v4(),
            "Instagram",
            "com.instagram.ios",
            "camera.fill",
            "Social Media",
        )
        .unwrap()
    }

    #[test]
    fn item_rejects_empty_name() {
        let result = AppItem::new(Uuid::new_v4(), "  ", "com.example", "x", "Games");
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn new_item_is_not_added() {
        let item = item();
        assert!(!item.is_added);
        assert!(item.date_added.is_none());
        assert!(item.user_category.is_none());
    }

    #[test]
    fn mark_added_sets_flag_and_timestamp_together() {
        let mut item = item();
        let first = Utc::now();
        item.mark_added(first);
        assert!(item.is_added);
        assert_eq!(item.date_added, Some(first));

        // Staying added must not refresh the timestamp.
        item.mark_added(first + chrono::Duration::hours(1));
        assert_eq!(item.date_added, Some(first));
    }

    #[test]
    fn mark_removed_clears_timestamp_and_override() {
        let mut item = item();
        item.mark_added(Utc::now());
        item.assign_category(Category::Productivity);
        item.mark_removed();
        assert!(!item.is_added);
        assert!(item.date_added.is_none());
        assert!(item.user_category.is_none());
    }

    #[test]
    fn effective_category_prefers_override() {
        let mut item = item();
        assert_eq!(item.effective_category(), "Social Media");
        item.assign_category(Category::Utilities);
        assert_eq!(item.effective_category(), "Utilities");
    }

    #[test]
    fn taxonomy_round_trips_every_name() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Legacy"), None);
    }

    #[test]
    fn folder_rejects_empty_name() {
        let result = AppFolder::new(Uuid::new_v4(), "", "#FF0000", 0);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
