//! Static localization tables for user-facing labels and notices.
//!
//! Lookup order follows the original translation tables: the active
//! language first, German as the fallback, and for unknown keys the key
//! itself. Identity and filtering never consult these tables - they are
//! presentation strings only.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::catalog::Language;
use crate::sort::SortKey;

/// Column index per language: [de, it, en].
fn column(lang: Language) -> usize {
    match lang {
        Language::De => 0,
        Language::It => 1,
        Language::En => 2,
    }
}

static UI_TEXT: Lazy<HashMap<&'static str, [&'static str; 3]>> = Lazy::new(|| {
    HashMap::from([
        (
            "all-recipes",
            ["Alle Rezepte", "Tutte le Ricette", "All Recipes"],
        ),
        (
            "search-placeholder",
            ["Trank suchen...", "Cerca pozione...", "Search potion..."],
        ),
        ("layout-label", ["Layout:", "Layout:", "Layout:"]),
        ("layout-grid", ["⊞ Grid", "⊞ Griglia", "⊞ Grid"]),
        ("layout-list", ["☰ List", "☰ Lista", "☰ List"]),
        (
            "filter-title",
            ["Filter & Suche", "Filtri & Ricerca", "Filter & Search"],
        ),
        ("filter-show", ["Einblenden", "Mostra", "Show"]),
        ("filter-hide", ["Ausblenden", "Nascondi", "Hide"]),
        (
            "ingredient-filter",
            [
                "Zutaten-Filter (mehrfach auswählbar):",
                "Filtro Ingredienti (selezione multipla):",
                "Ingredient Filter (multiple selection):",
            ],
        ),
        (
            "active-filters",
            ["Aktive Filter:", "Filtri Attivi:", "Active Filters:"],
        ),
        (
            "loading",
            ["Lade Tränke...", "Caricamento pozioni...", "Loading potions..."],
        ),
        (
            "no-results",
            [
                "Keine Tränke gefunden",
                "Nessuna pozione trovata",
                "No potions found",
            ],
        ),
        (
            "no-results-desc",
            [
                "Versuche andere Suchbegriffe oder Filter.",
                "Prova altri termini di ricerca o filtri.",
                "Try different search terms or filters.",
            ],
        ),
        ("ingredients", ["Zutaten", "Ingredienti", "Ingredients"]),
        (
            "recipe-steps",
            ["Rezept-Schritte", "Passaggi Ricetta", "Recipe Steps"],
        ),
        ("price", ["Preis", "Prezzo", "Price"]),
    ])
});

static CATEGORY_LABELS: Lazy<HashMap<&'static str, [&'static str; 3]>> = Lazy::new(|| {
    HashMap::from([
        (
            "all",
            ["Alle Kategorien", "Tutte le Categorie", "All Categories"],
        ),
        ("Heiltrank", ["Heiltrank", "Pozione Curativa", "Healing Potion"]),
        (
            "Kampf-Buff",
            ["Kampf-Buff", "Potenziamento Combattimento", "Combat Buff"],
        ),
        ("Gift", ["Gift", "Veleno", "Poison"]),
        ("Handwerk", ["Handwerk", "Artigianato", "Crafting"]),
        ("Utility", ["Utility", "Utilità", "Utility"]),
    ])
});

/// UI label for a translation key.
pub fn text<'a>(lang: Language, key: &'a str) -> &'a str {
    match UI_TEXT.get(key) {
        Some(row) => row[column(lang)],
        None => key,
    }
}

/// Localized label for a category key ("all" included). Unknown
/// categories display their raw key.
pub fn category_label<'a>(lang: Language, key: &'a str) -> &'a str {
    match CATEGORY_LABELS.get(key) {
        Some(row) => row[column(lang)],
        None => key,
    }
}

/// Localized label for a sort option.
pub fn sort_label(lang: Language, key: SortKey) -> &'static str {
    let row: [&'static str; 3] = match key {
        SortKey::NameAsc => ["Name A→Z", "Nome A→Z", "Name A→Z"],
        SortKey::NameDesc => ["Name Z→A", "Nome Z→A", "Name Z→A"],
        SortKey::CategoryAsc => ["Kategorie A→Z", "Categoria A→Z", "Category A→Z"],
        SortKey::CategoryDesc => ["Kategorie Z→A", "Categoria Z→A", "Category Z→A"],
        SortKey::PriceAsc => ["Preis ↑", "Prezzo ↑", "Price ↑"],
        SortKey::PriceDesc => ["Preis ↓", "Prezzo ↓", "Price ↓"],
        SortKey::IngredientsAsc => ["Zutaten ↑", "Ingredienti ↑", "Ingredients ↑"],
        SortKey::IngredientsDesc => ["Zutaten ↓", "Ingredienti ↓", "Ingredients ↓"],
    };
    row[column(lang)]
}

/// Notice text for a rejected ingredient selection.
pub fn selection_rejected_message(lang: Language) -> &'static str {
    match lang {
        Language::De => "Keine Rezepte mit dieser Zutatenkombination gefunden!",
        Language::It => "Nessuna ricetta trovata con questa combinazione di ingredienti!",
        Language::En => "No recipes found with this ingredient combination!",
    }
}

/// Tooltip for an ingredient tag that cannot be combined with the
/// current selection.
pub fn combination_unavailable_tooltip(lang: Language) -> &'static str {
    match lang {
        Language::De => "Keine Rezepte mit dieser Kombination verfügbar",
        Language::It => "Nessuna ricetta disponibile con questa combinazione",
        Language::En => "No recipes available with this combination",
    }
}

/// Title shown when the catalog failed to load.
pub fn load_error_title(lang: Language) -> &'static str {
    match lang {
        Language::De => "Fehler beim Laden",
        Language::It => "Errore di Caricamento",
        Language::En => "Loading Error",
    }
}

/// Body shown when the catalog failed to load.
pub fn load_error_desc(lang: Language) -> &'static str {
    match lang {
        Language::De => "Die Rezepte konnten nicht geladen werden. Bitte lade die Seite neu.",
        Language::It => "Le ricette non possono essere caricate. Ricarica la pagina.",
        Language::En => "Recipes could not be loaded. Please reload the page.",
    }
}

/// Singular/plural recipe noun for count displays.
pub fn recipe_count_label(lang: Language, count: usize) -> &'static str {
    match (lang, count) {
        (Language::De, 1) => "Rezept",
        (Language::De, _) => "Rezepte",
        (Language::It, 1) => "Ricetta",
        (Language::It, _) => "Ricette",
        (Language::En, 1) => "Recipe",
        (Language::En, _) => "Recipes",
    }
}
