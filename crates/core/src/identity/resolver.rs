//! Canonical ingredient id resolution.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use crate::catalog::{Language, Recipe};

/// Leading quantity marker, e.g. "2x " or "10 x ".
static QUANTITY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*x\s*").expect("quantity prefix pattern is valid"));

/// Strip a leading quantity marker and surrounding whitespace.
///
/// `"2x Wasser"` becomes `"Wasser"`. Strings without a marker are only
/// trimmed. The raw string stays untouched in the catalog for verbatim
/// display.
pub fn clean(text: &str) -> String {
    let stripped = match QUANTITY_PREFIX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    stripped.trim().to_string()
}

/// Resolve an ingredient string to its canonical, German-anchored id.
///
/// German input is its own id after cleaning. For other languages the
/// entry is located by position in that language's list and the cleaned
/// German entry at the same position is the id.
///
/// When the positional lookup fails (text not found, or the German list
/// is shorter) the cleaned input text becomes a language-local id. That
/// degradation is deliberate: miskeyed translation data must not make an
/// ingredient unfilterable, even though it can fragment one ingredient
/// into per-language identities.
pub fn resolve(text: &str, recipe: &Recipe, lang: Language) -> String {
    let cleaned = clean(text);
    if lang == Language::De {
        return cleaned;
    }

    let entries = recipe.ingredients.get(lang);
    let position = entries.iter().position(|entry| clean(entry) == cleaned);

    match position.and_then(|idx| recipe.ingredients.de.get(idx)) {
        Some(anchor) => clean(anchor),
        None => {
            debug!(
                recipe = %recipe.id,
                lang = %lang,
                ingredient = %cleaned,
                "No German anchor for ingredient, keeping language-local id"
            );
            cleaned
        }
    }
}

/// Canonical ids of every ingredient of a recipe in the given language.
pub fn recipe_ingredient_ids(recipe: &Recipe, lang: Language) -> HashSet<String> {
    recipe
        .ingredients
        .get(lang)
        .iter()
        .map(|raw| resolve(raw, recipe, lang))
        .collect()
}
