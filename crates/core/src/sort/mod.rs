//! Ordering of the filtered recipe view.
//!
//! All sorts are stable: ties keep their relative catalog order, and a
//! descending key is the exact reversal of its ascending comparator.

use serde::{Deserialize, Serialize};

use crate::catalog::{Language, Recipe};

/// Available sort orders. The codes ("name-asc", ...) are what gets
/// persisted as the sticky sort preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    CategoryAsc,
    CategoryDesc,
    PriceAsc,
    PriceDesc,
    IngredientsAsc,
    IngredientsDesc,
}

impl SortKey {
    /// All keys in presentation order.
    pub const ALL: [SortKey; 8] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::CategoryAsc,
        SortKey::CategoryDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::IngredientsAsc,
        SortKey::IngredientsDesc,
    ];

    /// Stable code for persistence and option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::CategoryAsc => "category-asc",
            SortKey::CategoryDesc => "category-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::IngredientsAsc => "ingredients-asc",
            SortKey::IngredientsDesc => "ingredients-desc",
        }
    }

    /// Parse a persisted code.
    pub fn from_code(code: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|key| key.as_str() == code)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn name_key(recipe: &Recipe, lang: Language) -> String {
    recipe.name.get(lang).to_lowercase()
}

fn price_key(recipe: &Recipe) -> f64 {
    recipe.price.unwrap_or(0.0)
}

fn ingredient_count(recipe: &Recipe, lang: Language) -> usize {
    recipe.ingredients.get(lang).len()
}

/// Sort recipes in place by the given key.
///
/// Name comparison is case-insensitive on the localized name (German
/// fallback), category compares the raw key, a missing price counts as 0.
pub fn sort_recipes(recipes: &mut [Recipe], key: SortKey, lang: Language) {
    match key {
        SortKey::NameAsc => recipes.sort_by(|a, b| name_key(a, lang).cmp(&name_key(b, lang))),
        SortKey::NameDesc => recipes.sort_by(|a, b| name_key(b, lang).cmp(&name_key(a, lang))),
        SortKey::CategoryAsc => recipes.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::CategoryDesc => recipes.sort_by(|a, b| b.category.cmp(&a.category)),
        SortKey::PriceAsc => recipes.sort_by(|a, b| price_key(a).total_cmp(&price_key(b))),
        SortKey::PriceDesc => recipes.sort_by(|a, b| price_key(b).total_cmp(&price_key(a))),
        SortKey::IngredientsAsc => {
            recipes.sort_by_key(|r| ingredient_count(r, lang));
        }
        SortKey::IngredientsDesc => {
            recipes.sort_by(|a, b| ingredient_count(b, lang).cmp(&ingredient_count(a, lang)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.de.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            fixtures::named_recipe("r1", "Schlaftrank", "Utility", Some(25.0), &["1x Wasser"]),
            fixtures::named_recipe(
                "r2",
                "Gifttrank",
                "Gift",
                Some(5.0),
                &["1x Wasser", "1x Fliegenpilz", "1x Pfeffer"],
            ),
            fixtures::named_recipe("r3", "Heiltrank", "Heiltrank", None, &["1x Wasser", "1x Salz"]),
        ]
    }

    #[test]
    fn test_sort_key_codes_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_code(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_code("seeders-desc"), None);
    }

    #[test]
    fn test_sort_key_serde_uses_kebab_codes() {
        assert_eq!(
            serde_json::to_string(&SortKey::NameAsc).unwrap(),
            "\"name-asc\""
        );
        let key: SortKey = serde_json::from_str("\"ingredients-desc\"").unwrap();
        assert_eq!(key, SortKey::IngredientsDesc);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::NameAsc, Language::De);
        assert_eq!(names(&recipes), ["Gifttrank", "Heiltrank", "Schlaftrank"]);
    }

    #[test]
    fn test_sort_desc_reverses_asc_without_ties() {
        let mut asc = sample();
        let mut desc = sample();
        sort_recipes(&mut asc, SortKey::NameAsc, Language::De);
        sort_recipes(&mut desc, SortKey::NameDesc, Language::De);
        asc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn test_sort_by_price_treats_missing_as_zero() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::PriceAsc, Language::De);
        // Heiltrank has no price and sorts first.
        assert_eq!(names(&recipes), ["Heiltrank", "Gifttrank", "Schlaftrank"]);
    }

    #[test]
    fn test_sort_by_ingredient_count() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::IngredientsDesc, Language::De);
        assert_eq!(names(&recipes), ["Gifttrank", "Heiltrank", "Schlaftrank"]);
    }

    #[test]
    fn test_sort_is_idempotent_on_sorted_input() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::CategoryAsc, Language::De);
        let once = names(&recipes).join(",");
        sort_recipes(&mut recipes, SortKey::CategoryAsc, Language::De);
        assert_eq!(names(&recipes).join(","), once);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut recipes = vec![
            fixtures::named_recipe("a", "Trank A", "Gift", Some(10.0), &["1x Wasser"]),
            fixtures::named_recipe("b", "Trank B", "Gift", Some(10.0), &["1x Wasser"]),
            fixtures::named_recipe("c", "Trank C", "Gift", Some(10.0), &["1x Wasser"]),
        ];
        sort_recipes(&mut recipes, SortKey::PriceAsc, Language::De);
        let ids: Vec<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
