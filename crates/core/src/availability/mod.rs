//! Ingredient availability under the current selection.
//!
//! Availability answers "which ingredients can still be added without
//! emptying the result set". The UI greys unavailable tags out rather
//! than hiding them, and deselecting an already-selected ingredient is
//! always allowed regardless of these computations.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::catalog::{Catalog, Language};
use crate::identity::{build_index, recipe_ingredient_ids};

/// Ingredient ids compatible with the current selection.
///
/// With nothing selected every known id is available. Otherwise the
/// result is the union of ingredient ids over exactly those recipes that
/// contain all selected ingredients. Selected ids are always part of the
/// result, since every compatible recipe contains them.
pub fn available(
    catalog: &Catalog,
    selected: &BTreeSet<String>,
    lang: Language,
) -> HashSet<String> {
    if selected.is_empty() {
        return build_index(catalog, lang).into_keys().collect();
    }

    let mut out = HashSet::new();
    for recipe in catalog.recipes() {
        let ids = recipe_ingredient_ids(recipe, lang);
        if selected.iter().all(|id| ids.contains(id)) {
            out.extend(ids);
        }
    }
    out
}

/// Whether adding `candidate` to the selection leaves at least one
/// matching recipe.
///
/// This simulates the proposed selection directly instead of consulting
/// [`available`]: availability reflects compatibility with the current
/// selection, while this validates the next one. The two agree, but
/// computing the check independently avoids any ordering dependency
/// between the two recomputations.
pub fn can_select(
    catalog: &Catalog,
    selected: &BTreeSet<String>,
    candidate: &str,
    lang: Language,
) -> bool {
    let mut proposed = selected.clone();
    proposed.insert(candidate.to_string());

    catalog.recipes().iter().any(|recipe| {
        let ids = recipe_ingredient_ids(recipe, lang);
        proposed.iter().all(|id| ids.contains(id))
    })
}

/// A rejected attempt to select an ingredient combination with zero
/// matching recipes. Carried as a value, not an error: the host shows it
/// as a transient notice and the selection stays unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRejected {
    /// The ingredient the user tried to add.
    pub ingredient_id: String,
    /// Language the message is localized in.
    pub language: Language,
    /// User-facing, localized notice text.
    pub message: String,
}

/// Receiver for rejection notices. Display duration and dismissal are
/// entirely the host's concern.
pub trait NoticeSink: Send + Sync {
    fn selection_rejected(&self, notice: &SelectionRejected);
}
