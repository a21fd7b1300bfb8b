//! Step classification for recipe instructions.
//!
//! Assigns each free-text instruction line a semantic type so renderers
//! can group and color the brewing phases. Classification is
//! first-match-wins over keyword sets per language and is presentation
//! metadata only - it never influences filtering or sorting.

use serde::{Deserialize, Serialize};

use crate::catalog::{Language, Recipe};

/// Semantic category of a single recipe step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Setting up the base fluid. The first step is always base.
    Base,
    /// Active cooking (boiling, working the bellows).
    Cooking,
    /// Finishing moves (pouring, distilling).
    Finishing,
    /// Adding an ingredient; the default when nothing else matches.
    Ingredient,
}

/// One classified instruction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedStep {
    /// The instruction text, verbatim.
    pub text: String,
    pub step_type: StepType,
    /// 1-based position for display.
    pub ordinal: usize,
}

fn base_fluid_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::De => &["wasser", "öl", "alkohol", "wein"],
        Language::It => &["acqua", "olio", "alcol", "vino"],
        Language::En => &["water", "oil", "spirits", "wine"],
    }
}

fn finishing_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::De => &["einschenken", "destillieren", "kesselinhalt"],
        Language::It => &["versare", "distillare", "kesselinhalt"],
        Language::En => &["pour", "distill", "grind cauldron"],
    }
}

fn cooking_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::De => &["kochen", "blasebalg"],
        Language::It => &["bollire", "mantice"],
        Language::En => &["boil", "bellows"],
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Classify a sequence of instruction lines.
///
/// Rules, first match wins: the first step is always base; then base
/// fluids, finishing keywords, cooking keywords; everything else is an
/// ingredient addition. Matching is a case-insensitive substring test
/// against the keyword set of the given language.
pub fn classify(steps: &[String], lang: Language) -> Vec<ClassifiedStep> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            let lower = step.to_lowercase();
            let step_type = if idx == 0 || contains_any(&lower, base_fluid_keywords(lang)) {
                StepType::Base
            } else if contains_any(&lower, finishing_keywords(lang)) {
                StepType::Finishing
            } else if contains_any(&lower, cooking_keywords(lang)) {
                StepType::Cooking
            } else {
                StepType::Ingredient
            };
            ClassifiedStep {
                text: step.clone(),
                step_type,
                ordinal: idx + 1,
            }
        })
        .collect()
}

/// Classify a recipe's steps in the given language, falling back to
/// German when the language is absent.
pub fn classify_recipe(recipe: &Recipe, lang: Language) -> Vec<ClassifiedStep> {
    classify(recipe.recipe_steps.get(lang), lang)
}
