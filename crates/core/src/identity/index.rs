//! The id -> display text index for the active language.

use std::collections::HashMap;

use serde::Serialize;

use super::resolver::{clean, resolve};
use crate::catalog::{Catalog, Language};

/// One ingredient as the filter UI sees it: a stable cross-language id
/// plus the cleaned text in the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientIdentity {
    /// Canonical id: the cleaned German text.
    pub id: String,
    /// Cleaned text in the language the index was built for.
    pub display_text: String,
}

/// Collect every ingredient of the catalog into an id-keyed index.
///
/// Occurrences of the same id across recipes overwrite each other; by the
/// positional-correspondence invariant they all carry the same cleaned
/// text per language, so last-write-wins is sufficient.
pub fn build_index(catalog: &Catalog, lang: Language) -> HashMap<String, IngredientIdentity> {
    let mut index = HashMap::new();
    for recipe in catalog.recipes() {
        for raw in recipe.ingredients.get(lang) {
            let id = resolve(raw, recipe, lang);
            index.insert(
                id.clone(),
                IngredientIdentity {
                    id,
                    display_text: clean(raw),
                },
            );
        }
    }
    index
}
