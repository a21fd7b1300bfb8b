//! The single owner of filter state over an immutable catalog.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use kesselbuch_core::{
    apply, available, build_index, can_select, classify_recipe, i18n, load_catalog, sort_recipes,
    Catalog, CatalogError, CatalogSource, CategorySelection, ClassifiedStep, Config, FilterState,
    Language, Layout, NoticeSink, PreferencesStore, PrefsError, SelectionRejected, SortKey,
};

use crate::snapshot::{FilterStats, SessionSnapshot};

/// Callback invoked with a fresh snapshot after every committed
/// transition.
pub type ObserverCallback = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Errors that can end a session before it starts.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog could not be loaded. Terminal for the session; the
    /// host shows a reload prompt.
    #[error("Catalog load failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The preference store could not be opened.
    #[error("Preference store error: {0}")]
    Preferences(#[from] PrefsError),
}

/// Result of an ingredient tag toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The ingredient was added to the selection.
    Selected,
    /// The ingredient was removed from the selection.
    Deselected,
    /// Adding the ingredient would have emptied the result set; the
    /// selection is unchanged and the notice went to the sinks.
    Rejected(SelectionRejected),
}

/// Session over one loaded catalog.
///
/// Owns the [`FilterState`]; every mutation goes through a method here,
/// recomputes the full derived view, and notifies observers with the
/// new snapshot. The engines themselves stay pure.
pub struct Session {
    catalog: Catalog,
    state: FilterState,
    prefs: Arc<dyn PreferencesStore>,
    observers: Vec<ObserverCallback>,
    notice_sinks: Vec<Arc<dyn NoticeSink>>,
}

impl Session {
    /// Load the catalog from a source, restore sticky preferences and
    /// build the session.
    ///
    /// A catalog failure is terminal and propagated. Preference read
    /// failures only cost the stored values: the session starts with
    /// configured defaults instead.
    pub async fn bootstrap(
        config: &Config,
        source: &dyn CatalogSource,
        prefs: Arc<dyn PreferencesStore>,
    ) -> Result<Self, SessionError> {
        let catalog = load_catalog(source).await?;
        let mut session = Self::with_catalog(catalog, prefs);
        session.state.language = config.language.default;
        session.restore_preferences();
        info!(
            recipes = session.catalog.len(),
            language = %session.state.language,
            "Session ready"
        );
        Ok(session)
    }

    /// Build a session over an already-loaded catalog (embedders,
    /// tests). No preferences are restored.
    pub fn with_catalog(catalog: Catalog, prefs: Arc<dyn PreferencesStore>) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
            prefs,
            observers: Vec::new(),
            notice_sinks: Vec::new(),
        }
    }

    fn restore_preferences(&mut self) {
        match self.prefs.language() {
            Ok(Some(lang)) => self.state.language = lang,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Could not restore language preference"),
        }
        match self.prefs.layout() {
            Ok(Some(layout)) => self.state.layout = layout,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Could not restore layout preference"),
        }
        match self.prefs.sort() {
            Ok(Some(sort)) => self.state.sort = sort,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Could not restore sort preference"),
        }
    }

    /// Register an observer; it is called with a snapshot after every
    /// committed transition.
    pub fn add_observer(&mut self, observer: ObserverCallback) {
        self.observers.push(observer);
    }

    /// Register a sink for selection-rejection notices.
    pub fn add_notice_sink(&mut self, sink: Arc<dyn NoticeSink>) {
        self.notice_sinks.push(sink);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Compute the full derived view for the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let lang = self.state.language;

        let mut recipes = apply(&self.catalog, &self.state);
        sort_recipes(&mut recipes, self.state.sort, lang);

        let mut ingredients: Vec<_> = build_index(&self.catalog, lang).into_values().collect();
        ingredients.sort_by(|a, b| {
            a.display_text
                .to_lowercase()
                .cmp(&b.display_text.to_lowercase())
        });

        let available = available(&self.catalog, &self.state.selected_ingredients, lang);

        let stats = FilterStats {
            total: self.catalog.len(),
            filtered: recipes.len(),
            selected: self.state.selected_ingredients.len(),
        };

        SessionSnapshot {
            state: self.state.clone(),
            recipes,
            ingredients,
            available,
            stats,
        }
    }

    fn commit(&self) -> SessionSnapshot {
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
        snapshot
    }

    /// Update the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> SessionSnapshot {
        self.state.search_term = term.into();
        self.commit()
    }

    /// Update the category restriction.
    pub fn set_category(&mut self, selection: CategorySelection) -> SessionSnapshot {
        self.state.category = selection;
        self.commit()
    }

    /// Change the sort order. Persisted as a sticky preference.
    pub fn set_sort(&mut self, key: SortKey) -> SessionSnapshot {
        self.state.sort = key;
        if let Err(e) = self.prefs.set_sort(key) {
            warn!(error = %e, "Could not persist sort preference");
        }
        self.commit()
    }

    /// Change the layout. Persisted as a sticky preference.
    pub fn set_layout(&mut self, layout: Layout) -> SessionSnapshot {
        self.state.layout = layout;
        if let Err(e) = self.prefs.set_layout(layout) {
            warn!(error = %e, "Could not persist layout preference");
        }
        self.commit()
    }

    /// Persist the filter-panel expanded flag. Pure presentation state:
    /// no recomputation, no observer notification.
    pub fn set_filter_panel_expanded(&self, expanded: bool) {
        if let Err(e) = self.prefs.set_filter_expanded(expanded) {
            warn!(error = %e, "Could not persist filter panel preference");
        }
    }

    /// Switch the display language. Persisted as a sticky preference.
    ///
    /// Ingredient ids stay German-anchored; only the display texts in
    /// the snapshot change, so the current selection survives the
    /// switch.
    pub fn switch_language(&mut self, lang: Language) -> SessionSnapshot {
        self.state.language = lang;
        if let Err(e) = self.prefs.set_language(lang) {
            warn!(error = %e, "Could not persist language preference");
        }
        self.commit()
    }

    /// Toggle an ingredient tag.
    ///
    /// Removal is always legal and never validated. Additions are
    /// validated eagerly: when no recipe would match the grown
    /// selection, the state stays untouched, every notice sink receives
    /// the localized rejection, and the outcome reports it.
    pub fn toggle_ingredient(&mut self, ingredient_id: &str) -> ToggleOutcome {
        if self.state.selected_ingredients.remove(ingredient_id) {
            debug!(ingredient = %ingredient_id, "Ingredient deselected");
            self.commit();
            return ToggleOutcome::Deselected;
        }

        let lang = self.state.language;
        if can_select(
            &self.catalog,
            &self.state.selected_ingredients,
            ingredient_id,
            lang,
        ) {
            self.state
                .selected_ingredients
                .insert(ingredient_id.to_string());
            debug!(ingredient = %ingredient_id, "Ingredient selected");
            self.commit();
            ToggleOutcome::Selected
        } else {
            let notice = SelectionRejected {
                ingredient_id: ingredient_id.to_string(),
                language: lang,
                message: i18n::selection_rejected_message(lang).to_string(),
            };
            debug!(ingredient = %ingredient_id, "Ingredient selection rejected");
            for sink in &self.notice_sinks {
                sink.selection_rejected(&notice);
            }
            ToggleOutcome::Rejected(notice)
        }
    }

    /// Drop every selected ingredient.
    pub fn clear_selection(&mut self) -> SessionSnapshot {
        self.state.selected_ingredients.clear();
        self.commit()
    }

    /// Classified step breakdown of one recipe in the active language,
    /// for the expanded recipe card.
    pub fn classified_steps(&self, recipe_id: &str) -> Option<Vec<ClassifiedStep>> {
        self.catalog
            .get(recipe_id)
            .map(|recipe| classify_recipe(recipe, self.state.language))
    }
}
