//! Engines for a multilingual potion recipe catalog.
//!
//! The catalog is a small static JSON collection with parallel
//! per-language text. This crate loads it once, derives stable
//! cross-language ingredient identities from the German anchor entries,
//! and evaluates the filter, availability, sort and step-classification
//! views over it. Everything past the initial load is synchronous, pure
//! and recomputed in full per state change.

pub mod availability;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod i18n;
pub mod identity;
pub mod prefs;
pub mod sort;
pub mod steps;
pub mod testing;

pub use availability::{available, can_select, NoticeSink, SelectionRejected};
pub use catalog::{
    load_catalog, source_from_config, Catalog, CatalogDocument, CatalogError, CatalogSource,
    CatalogStats, FileCatalogSource, HttpCatalogSource, Language, LocalizedList, LocalizedText,
    Recipe,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    LanguageConfig, PreferencesConfig,
};
pub use filter::{apply, CategorySelection, FilterState, Layout};
pub use identity::{build_index, clean, recipe_ingredient_ids, resolve, IngredientIdentity};
pub use prefs::{PrefKey, PreferencesStore, PrefsError, SqlitePreferences};
pub use sort::{sort_recipes, SortKey};
pub use steps::{classify, classify_recipe, ClassifiedStep, StepType};
