//! Predicate evaluation over the catalog.

use std::collections::BTreeSet;

use tracing::debug;

use super::state::FilterState;
use crate::catalog::{Catalog, Language, Recipe};
use crate::identity::recipe_ingredient_ids;

fn matches_search(recipe: &Recipe, term: &str, lang: Language) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    recipe.name.get(lang).to_lowercase().contains(&needle)
        || recipe
            .effect_description
            .get(lang)
            .to_lowercase()
            .contains(&needle)
}

fn matches_ingredients(recipe: &Recipe, selected: &BTreeSet<String>, lang: Language) -> bool {
    if selected.is_empty() {
        return true;
    }
    let ids = recipe_ingredient_ids(recipe, lang);
    selected.iter().all(|id| ids.contains(id))
}

/// Apply all active predicates, returning the matching recipes in
/// catalog order.
///
/// A recipe passes when the search term occurs (case-insensitively) in
/// its localized name or effect description, its category matches the
/// selection exactly, and it contains every selected ingredient id.
/// Inclusion is binary; there is no ranking or fuzzy matching.
pub fn apply(catalog: &Catalog, state: &FilterState) -> Vec<Recipe> {
    let lang = state.language;
    let matched: Vec<Recipe> = catalog
        .recipes()
        .iter()
        .filter(|r| matches_search(r, &state.search_term, lang))
        .filter(|r| state.category.matches(&r.category))
        .filter(|r| matches_ingredients(r, &state.selected_ingredients, lang))
        .cloned()
        .collect();
    debug!(
        total = catalog.len(),
        matched = matched.len(),
        "Filters applied"
    );
    matched
}
