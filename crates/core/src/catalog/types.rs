//! Types for the recipe catalog.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Supported display languages. German is the canonical anchor: every
/// recipe carries German text, other languages are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    It,
    En,
}

impl Language {
    /// All supported languages, German first.
    pub const ALL: [Language; 3] = [Language::De, Language::It, Language::En];

    /// Two-letter language code as used in the catalog document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::It => "it",
            Language::En => "en",
        }
    }

    /// Parse a two-letter language code.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "de" => Some(Language::De),
            "it" => Some(Language::It),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single text field with a mandatory German entry and optional
/// translations. Lookups for an absent language fall back to German.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub de: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub it: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    /// Text in the requested language, falling back to German.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::De => &self.de,
            Language::It => self.it.as_deref().unwrap_or(&self.de),
            Language::En => self.en.as_deref().unwrap_or(&self.de),
        }
    }
}

/// An ordered list of strings per language (ingredients, recipe steps).
///
/// For every language present, the Nth entry denotes the same underlying
/// item as the Nth entry of the German list. That positional correspondence
/// is the only link between translations; the document carries no explicit
/// per-item ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedList {
    pub de: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub it: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<Vec<String>>,
}

impl LocalizedList {
    /// Entries in the requested language, falling back to German.
    pub fn get(&self, lang: Language) -> &[String] {
        match lang {
            Language::De => &self.de,
            Language::It => self.it.as_deref().unwrap_or(&self.de),
            Language::En => self.en.as_deref().unwrap_or(&self.de),
        }
    }
}

/// A single recipe as stored in the catalog document.
///
/// Ingredient and step strings may carry a leading quantity marker
/// (e.g. `"2x Wasser"`). They are kept verbatim here; identity and
/// display cleaning happen in the identity module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    /// Canonical category key (German label, e.g. "Heiltrank").
    pub category: String,
    /// Vendor price in Groschen, absent for unsellable recipes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub name: LocalizedText,
    pub effect_description: LocalizedText,
    pub ingredients: LocalizedList,
    pub recipe_steps: LocalizedList,
}

/// Top-level shape of the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub recipes: Vec<Recipe>,
}

/// The loaded, immutable recipe catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    fingerprint: String,
}

impl Catalog {
    /// Wrap already-parsed recipes together with the hash of the raw
    /// document they came from.
    pub(crate) fn new(recipes: Vec<Recipe>, fingerprint: String) -> Self {
        Self {
            recipes,
            fingerprint,
        }
    }

    /// Build a catalog directly from recipe values (fixtures, embedders).
    ///
    /// The fingerprint is computed from the re-serialized document.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let doc = CatalogDocument {
            recipes: recipes.clone(),
        };
        let raw = serde_json::to_string(&doc).unwrap_or_default();
        let fingerprint = format!("{:x}", Sha256::digest(raw.as_bytes()));
        Self {
            recipes,
            fingerprint,
        }
    }

    /// All recipes in document order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True if the catalog holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Distinct category keys in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for recipe in &self.recipes {
            if !seen.contains(&recipe.category) {
                seen.push(recipe.category.clone());
            }
        }
        seen
    }

    /// SHA-256 hash of the raw document this catalog was loaded from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Summary counts over the whole catalog.
    pub fn stats(&self) -> CatalogStats {
        let mut per_category: Vec<(String, usize)> = Vec::new();
        for recipe in &self.recipes {
            match per_category.iter_mut().find(|(c, _)| c == &recipe.category) {
                Some((_, n)) => *n += 1,
                None => per_category.push((recipe.category.clone(), 1)),
            }
        }
        CatalogStats {
            total_recipes: self.recipes.len(),
            total_categories: per_category.len(),
            per_category,
        }
    }
}

/// Catalog summary counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Total recipes in the catalog.
    pub total_recipes: usize,
    /// Number of distinct categories.
    pub total_categories: usize,
    /// Recipe count per category, in first-seen order.
    pub per_category: Vec<(String, usize)>,
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not be read (missing file, I/O failure).
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The HTTP fetch failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document was fetched but is not valid JSON of the expected shape.
    #[error("Failed to parse catalog document: {0}")]
    Parse(String),

    /// The document parsed but violates a structural requirement.
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(de: &str, en: Option<&str>) -> LocalizedText {
        LocalizedText {
            de: de.to_string(),
            it: None,
            en: en.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_language_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_localized_text_falls_back_to_german() {
        let name = text("Heiltrank", None);
        assert_eq!(name.get(Language::En), "Heiltrank");
        assert_eq!(name.get(Language::It), "Heiltrank");

        let name = text("Heiltrank", Some("Healing Potion"));
        assert_eq!(name.get(Language::En), "Healing Potion");
        assert_eq!(name.get(Language::De), "Heiltrank");
    }

    #[test]
    fn test_localized_list_falls_back_to_german() {
        let list = LocalizedList {
            de: vec!["1x Wasser".to_string()],
            it: None,
            en: Some(vec!["1x Water".to_string()]),
        };
        assert_eq!(list.get(Language::En), ["1x Water"]);
        assert_eq!(list.get(Language::It), ["1x Wasser"]);
    }

    #[test]
    fn test_recipe_deserializes_minimal_document() {
        let json = r#"{
            "id": "heiltrank",
            "category": "Heiltrank",
            "name": { "de": "Heiltrank" },
            "effect_description": { "de": "Heilt Wunden" },
            "ingredients": { "de": ["1x Wasser", "2x Beinwell"] },
            "recipe_steps": { "de": ["Wasser erhitzen", "Beinwell hinzufügen"] }
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "heiltrank");
        assert_eq!(recipe.price, None);
        assert_eq!(recipe.ingredients.get(Language::En).len(), 2);
    }

    #[test]
    fn test_recipe_serialization_skips_absent_languages() {
        let recipe = Recipe {
            id: "r1".to_string(),
            category: "Gift".to_string(),
            price: None,
            name: text("Gifttrank", None),
            effect_description: text("Vergiftet", None),
            ingredients: LocalizedList {
                de: vec!["1x Wasser".to_string()],
                it: None,
                en: None,
            },
            recipe_steps: LocalizedList {
                de: vec!["Kochen".to_string()],
                it: None,
                en: None,
            },
        };
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(!json.contains("\"it\""));
        assert!(!json.contains("\"price\""));
    }

    #[test]
    fn test_catalog_categories_deduplicated_in_order() {
        let mk = |id: &str, category: &str| Recipe {
            id: id.to_string(),
            category: category.to_string(),
            price: None,
            name: text(id, None),
            effect_description: text("", None),
            ingredients: LocalizedList {
                de: vec![],
                it: None,
                en: None,
            },
            recipe_steps: LocalizedList {
                de: vec![],
                it: None,
                en: None,
            },
        };
        let catalog = Catalog::from_recipes(vec![
            mk("a", "Heiltrank"),
            mk("b", "Gift"),
            mk("c", "Heiltrank"),
        ]);
        assert_eq!(catalog.categories(), ["Heiltrank", "Gift"]);

        let stats = catalog.stats();
        assert_eq!(stats.total_recipes, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.per_category[0], ("Heiltrank".to_string(), 2));
    }

    #[test]
    fn test_catalog_fingerprint_is_stable() {
        let catalog_a = Catalog::from_recipes(vec![]);
        let catalog_b = Catalog::from_recipes(vec![]);
        assert_eq!(catalog_a.fingerprint(), catalog_b.fingerprint());
        assert_eq!(catalog_a.fingerprint().len(), 64);
    }
}
