//! End-to-end tests for the filter, availability and sort pipeline.
//!
//! These walk a complete user flow over a small catalog: select
//! ingredients, watch availability shrink, attempt an impossible
//! combination, switch languages, sort the result.

use std::collections::BTreeSet;

use kesselbuch_core::testing::fixtures;
use kesselbuch_core::{
    apply, available, build_index, can_select, classify_recipe, load_catalog, sort_recipes,
    CategorySelection, FilterState, Language, SortKey, StepType,
};
use kesselbuch_core::testing::MockCatalogSource;

fn selection(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn ids(recipes: &[kesselbuch_core::Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}

#[tokio::test]
async fn test_selection_walkthrough_narrows_and_rejects() {
    let source = MockCatalogSource::with_document(fixtures::document_json(&fixtures::pair_recipes()));
    let catalog = load_catalog(&source).await.unwrap();

    // Wasser is in both recipes: both pass, everything stays available.
    let mut state = FilterState {
        selected_ingredients: selection(&["Wasser"]),
        ..Default::default()
    };
    let filtered = apply(&catalog, &state);
    assert_eq!(ids(&filtered), ["heiltrank", "gifttrank"]);
    let avail = available(&catalog, &state.selected_ingredients, Language::De);
    assert_eq!(avail.len(), 3);

    // Adding Salz narrows to the Heiltrank and prunes Pfeffer.
    assert!(can_select(
        &catalog,
        &state.selected_ingredients,
        "Salz",
        Language::De
    ));
    state.selected_ingredients.insert("Salz".to_string());
    let filtered = apply(&catalog, &state);
    assert_eq!(ids(&filtered), ["heiltrank"]);

    let avail = available(&catalog, &state.selected_ingredients, Language::De);
    assert!(avail.contains("Wasser") && avail.contains("Salz"));
    assert!(!avail.contains("Pfeffer"));

    // Pfeffer would empty the result set and must be rejected.
    assert!(!can_select(
        &catalog,
        &state.selected_ingredients,
        "Pfeffer",
        Language::De
    ));
}

#[test]
fn test_subset_law_over_all_selections() {
    let catalog = fixtures::potion_pair_catalog();
    let all_ids = ["Wasser", "Salz", "Pfeffer"];

    // Every superset matches at most as many recipes as its subsets.
    for a in 0..all_ids.len() {
        let small = FilterState {
            selected_ingredients: selection(&all_ids[a..=a]),
            ..Default::default()
        };
        for b in 0..all_ids.len() {
            if a == b {
                continue;
            }
            let mut large = small.clone();
            large.selected_ingredients.insert(all_ids[b].to_string());
            assert!(apply(&catalog, &large).len() <= apply(&catalog, &small).len());
        }
    }
}

#[test]
fn test_cross_language_selection_is_stable() {
    let catalog = fixtures::trilingual_catalog();

    // A selection made while browsing German...
    let state_de = FilterState {
        selected_ingredients: selection(&["Salz"]),
        ..Default::default()
    };
    // ...matches the same recipes after switching to English, because
    // ids are German-anchored regardless of the active language.
    let state_en = FilterState {
        language: Language::En,
        ..state_de.clone()
    };
    assert_eq!(ids(&apply(&catalog, &state_de)), ids(&apply(&catalog, &state_en)));

    // Display text follows the language; the id does not.
    let index = build_index(&catalog, Language::En);
    let salt = index.get("Salz").unwrap();
    assert_eq!(salt.display_text, "Salt");
}

#[test]
fn test_filter_then_sort_full_view() {
    let catalog = fixtures::trilingual_catalog();
    let state = FilterState {
        category: CategorySelection::All,
        language: Language::En,
        ..Default::default()
    };

    let mut view = apply(&catalog, &state);
    sort_recipes(&mut view, SortKey::NameAsc, Language::En);
    // "Blade Poison" < "Healing Potion" under English names.
    assert_eq!(ids(&view), ["gifttrank", "heiltrank"]);

    sort_recipes(&mut view, SortKey::PriceDesc, Language::En);
    assert_eq!(ids(&view), ["gifttrank", "heiltrank"]);

    sort_recipes(&mut view, SortKey::NameDesc, Language::En);
    assert_eq!(ids(&view), ["heiltrank", "gifttrank"]);
}

#[test]
fn test_step_breakdown_for_rendering() {
    let catalog = fixtures::trilingual_catalog();
    let recipe = catalog.get("heiltrank").unwrap();

    let steps = classify_recipe(recipe, Language::De);
    let types: Vec<_> = steps.iter().map(|s| s.step_type).collect();
    assert_eq!(
        types,
        [
            StepType::Base,
            StepType::Ingredient,
            StepType::Cooking,
            StepType::Finishing
        ]
    );
    assert_eq!(steps[0].ordinal, 1);

    // The English steps classify the same way via the English keywords.
    let steps_en = classify_recipe(recipe, Language::En);
    let types_en: Vec<_> = steps_en.iter().map(|s| s.step_type).collect();
    assert_eq!(types, types_en);
    assert_eq!(steps_en[3].text, "Pour into phial");
}

#[tokio::test]
async fn test_catalog_unavailable_is_reported_not_panicked() {
    let source = MockCatalogSource::new();
    source.set_unavailable();
    let err = load_catalog(&source).await.unwrap_err();
    assert!(err.to_string().contains("unavailable"));
}
