//! The immutable derived view handed to observers.

use std::collections::HashSet;

use kesselbuch_core::{FilterState, IngredientIdentity, Recipe};

/// Counts for the stats line ("N of M potions, K filters active").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Recipes in the whole catalog.
    pub total: usize,
    /// Recipes passing the current filters.
    pub filtered: usize,
    /// Currently selected ingredient ids.
    pub selected: usize,
}

/// A complete, self-contained view of the session at one state.
///
/// Snapshots are recomputed from scratch on every transition and never
/// patched, so a host can hold on to one without it going stale
/// underneath.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// The state this snapshot was derived from.
    pub state: FilterState,
    /// Filtered recipes, ordered by the active sort key.
    pub recipes: Vec<Recipe>,
    /// Every known ingredient, sorted by display text in the active
    /// language (how the tag cloud presents them).
    pub ingredients: Vec<IngredientIdentity>,
    /// Ingredient ids still selectable without emptying the result set.
    /// Tags outside this set render disabled, not hidden.
    pub available: HashSet<String>,
    pub stats: FilterStats,
}

impl SessionSnapshot {
    /// Whether an ingredient tag should accept clicks: available under
    /// the current selection, or already selected (removal is always
    /// legal).
    pub fn is_selectable(&self, ingredient_id: &str) -> bool {
        self.available.contains(ingredient_id)
            || self.state.selected_ingredients.contains(ingredient_id)
    }
}
