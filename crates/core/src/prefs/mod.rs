//! Sticky user preferences.
//!
//! Language, layout, sort order and the filter-panel flag survive
//! sessions; everything else in the filter state is deliberately
//! ephemeral. The session layer reads and writes plain values through
//! [`PreferencesStore`] and never touches storage directly.

mod sqlite;

pub use sqlite::SqlitePreferences;

use thiserror::Error;

use crate::catalog::Language;
use crate::filter::Layout;
use crate::sort::SortKey;

/// Errors for preference storage.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Database error: {0}")]
    Database(String),
}

/// The persisted preference slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    Language,
    Layout,
    Sort,
    FilterExpanded,
}

impl PrefKey {
    /// Storage key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefKey::Language => "language",
            PrefKey::Layout => "layout",
            PrefKey::Sort => "sort",
            PrefKey::FilterExpanded => "filter_expanded",
        }
    }
}

/// Trait for preference storage backends.
///
/// Typed accessors are provided on top of the raw string slots; a stored
/// value that no longer parses reads as absent rather than failing.
pub trait PreferencesStore: Send + Sync {
    /// Read a raw slot.
    fn get(&self, key: PrefKey) -> Result<Option<String>, PrefsError>;

    /// Write a raw slot.
    fn set(&self, key: PrefKey, value: &str) -> Result<(), PrefsError>;

    /// Clear a slot.
    fn remove(&self, key: PrefKey) -> Result<(), PrefsError>;

    fn language(&self) -> Result<Option<Language>, PrefsError> {
        Ok(self
            .get(PrefKey::Language)?
            .and_then(|v| Language::from_code(&v)))
    }

    fn set_language(&self, lang: Language) -> Result<(), PrefsError> {
        self.set(PrefKey::Language, lang.as_str())
    }

    fn layout(&self) -> Result<Option<Layout>, PrefsError> {
        Ok(self
            .get(PrefKey::Layout)?
            .and_then(|v| Layout::from_code(&v)))
    }

    fn set_layout(&self, layout: Layout) -> Result<(), PrefsError> {
        self.set(PrefKey::Layout, layout.as_str())
    }

    fn sort(&self) -> Result<Option<SortKey>, PrefsError> {
        Ok(self
            .get(PrefKey::Sort)?
            .and_then(|v| SortKey::from_code(&v)))
    }

    fn set_sort(&self, key: SortKey) -> Result<(), PrefsError> {
        self.set(PrefKey::Sort, key.as_str())
    }

    fn filter_expanded(&self) -> Result<Option<bool>, PrefsError> {
        Ok(self.get(PrefKey::FilterExpanded)?.map(|v| v == "true"))
    }

    fn set_filter_expanded(&self, expanded: bool) -> Result<(), PrefsError> {
        self.set(
            PrefKey::FilterExpanded,
            if expanded { "true" } else { "false" },
        )
    }
}
