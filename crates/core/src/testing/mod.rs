//! Testing utilities and mock implementations.
//!
//! Mocks for the collaborator traits (catalog source, preference store,
//! notice sink) plus recipe fixtures, so sessions can be exercised
//! without a filesystem, network, or database.

mod collecting_sink;
mod memory_preferences;
mod mock_catalog;

pub use collecting_sink::CollectingNoticeSink;
pub use memory_preferences::MemoryPreferences;
pub use mock_catalog::MockCatalogSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{
        Catalog, CatalogDocument, LocalizedList, LocalizedText, Recipe,
    };

    /// A localized text field with optional translations.
    pub fn localized(de: &str, it: Option<&str>, en: Option<&str>) -> LocalizedText {
        LocalizedText {
            de: de.to_string(),
            it: it.map(|s| s.to_string()),
            en: en.map(|s| s.to_string()),
        }
    }

    /// A localized list with optional translations.
    pub fn localized_list(
        de: &[&str],
        it: Option<&[&str]>,
        en: Option<&[&str]>,
    ) -> LocalizedList {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        LocalizedList {
            de: to_vec(de),
            it: it.map(to_vec),
            en: en.map(to_vec),
        }
    }

    /// A German-only recipe with reasonable defaults.
    pub fn recipe(id: &str, category: &str, price: Option<f64>, ingredients: &[&str]) -> Recipe {
        named_recipe(id, id, category, price, ingredients)
    }

    /// A German-only recipe with an explicit display name.
    pub fn named_recipe(
        id: &str,
        name: &str,
        category: &str,
        price: Option<f64>,
        ingredients: &[&str],
    ) -> Recipe {
        Recipe {
            id: id.to_string(),
            category: category.to_string(),
            price,
            name: localized(name, None, None),
            effect_description: localized("", None, None),
            ingredients: localized_list(ingredients, None, None),
            recipe_steps: localized_list(&["Wasser erhitzen", "Einschenken"], None, None),
        }
    }

    /// A recipe translated into all three languages, with quantity
    /// markers on every ingredient.
    pub fn trilingual_recipe() -> Recipe {
        Recipe {
            id: "heiltrank".to_string(),
            category: "Heiltrank".to_string(),
            price: Some(10.0),
            name: localized("Heiltrank", Some("Pozione Curativa"), Some("Healing Potion")),
            effect_description: localized(
                "Heilt Wunden über Zeit",
                Some("Guarisce le ferite nel tempo"),
                Some("Heals wounds over time"),
            ),
            ingredients: localized_list(
                &["2x Wasser", "1x Salz"],
                Some(&["2x Acqua", "1x Sale"]),
                Some(&["2x Water", "1x Salt"]),
            ),
            recipe_steps: localized_list(
                &[
                    "Wasser erhitzen",
                    "Salz hinzufügen",
                    "Kochen für 5 Minuten",
                    "Einschenken",
                ],
                Some(&[
                    "Scaldare l'acqua",
                    "Aggiungere il sale",
                    "Bollire per 5 minuti",
                    "Versare",
                ]),
                Some(&[
                    "Heat the water",
                    "Add the salt",
                    "Boil for 5 minutes",
                    "Pour into phial",
                ]),
            ),
        }
    }

    /// The German-only two-recipe catalog: Heiltrank (Wasser + Salz) and
    /// Gifttrank (Wasser + Pfeffer).
    pub fn pair_recipes() -> Vec<Recipe> {
        vec![
            Recipe {
                id: "heiltrank".to_string(),
                category: "Heiltrank".to_string(),
                price: Some(10.0),
                name: localized("Heiltrank", None, None),
                effect_description: localized("Heilt Wunden über Zeit", None, None),
                ingredients: localized_list(&["1x Wasser", "1x Salz"], None, None),
                recipe_steps: localized_list(
                    &["Wasser erhitzen", "Salz hinzufügen", "Einschenken"],
                    None,
                    None,
                ),
            },
            Recipe {
                id: "gifttrank".to_string(),
                category: "Gift".to_string(),
                price: Some(20.0),
                name: localized("Gifttrank", None, None),
                effect_description: localized("Vergiftet die Klinge", None, None),
                ingredients: localized_list(&["1x Wasser", "1x Pfeffer"], None, None),
                recipe_steps: localized_list(
                    &["Wasser erhitzen", "Pfeffer hinzufügen", "Einschenken"],
                    None,
                    None,
                ),
            },
        ]
    }

    /// Catalog over [`pair_recipes`].
    pub fn potion_pair_catalog() -> Catalog {
        Catalog::from_recipes(pair_recipes())
    }

    /// The pair catalog with Italian and English translations.
    pub fn trilingual_catalog() -> Catalog {
        let gifttrank = Recipe {
            id: "gifttrank".to_string(),
            category: "Gift".to_string(),
            price: Some(20.0),
            name: localized("Gifttrank", Some("Veleno"), Some("Blade Poison")),
            effect_description: localized(
                "Vergiftet die Klinge",
                Some("Avvelena la lama"),
                Some("Poisons the blade"),
            ),
            ingredients: localized_list(
                &["2x Wasser", "1x Pfeffer"],
                Some(&["2x Acqua", "1x Pepe"]),
                Some(&["2x Water", "1x Pepper"]),
            ),
            recipe_steps: localized_list(
                &["Wasser erhitzen", "Pfeffer hinzufügen", "Einschenken"],
                Some(&["Scaldare l'acqua", "Aggiungere il pepe", "Versare"]),
                Some(&["Heat the water", "Add the pepper", "Pour into phial"]),
            ),
        };
        Catalog::from_recipes(vec![trilingual_recipe(), gifttrank])
    }

    /// Serialize recipes into the raw document format a source serves.
    pub fn document_json(recipes: &[Recipe]) -> String {
        serde_json::to_string_pretty(&CatalogDocument {
            recipes: recipes.to_vec(),
        })
        .expect("fixture recipes serialize")
    }
}
