//! The complete set of user-controlled filter and view settings.

use std::collections::BTreeSet;

use crate::catalog::Language;
use crate::sort::SortKey;

/// Category filter: everything, or exactly one category key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// Parse an option value; `"all"` is the wildcard.
    pub fn from_key(key: &str) -> CategorySelection {
        if key == "all" {
            CategorySelection::All
        } else {
            CategorySelection::Category(key.to_string())
        }
    }

    /// The option value this selection corresponds to.
    pub fn as_key(&self) -> &str {
        match self {
            CategorySelection::All => "all",
            CategorySelection::Category(key) => key,
        }
    }

    /// Whether a recipe with the given category key passes.
    ///
    /// Comparison is exact on the canonical key; localized labels are
    /// never consulted here.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(key) => key == category,
        }
    }
}

/// Grid or list rendering of the recipe collection. Pure presentation
/// state, carried here because it is persisted alongside sort and
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        }
    }

    pub fn from_code(code: &str) -> Option<Layout> {
        match code {
            "grid" => Some(Layout::Grid),
            "list" => Some(Layout::List),
            _ => None,
        }
    }
}

/// Session-scoped filter state.
///
/// Mutated only by its single owner; the engines treat it as an
/// immutable input and recompute the full view on every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Free-text search over localized name and effect description.
    pub search_term: String,
    /// Category restriction.
    pub category: CategorySelection,
    /// Canonical ingredient ids that a recipe must all contain.
    pub selected_ingredients: BTreeSet<String>,
    /// Order of the filtered view.
    pub sort: SortKey,
    /// Grid or list presentation.
    pub layout: Layout,
    /// Active display language.
    pub language: Language,
}
