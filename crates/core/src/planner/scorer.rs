use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::preferences::UserPreferences;
use crate::domain::recipe::Recipe;

/// Additive score weights. Availability contributes proportionally (the
/// weight times the fraction of required ingredient names on hand); the other
/// terms are flat bonuses or penalties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub availability: f64,
    pub within_prep_time: f64,
    pub over_prep_time: f64,
    pub dietary_match: f64,
    pub excluded_ingredient: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            availability: 5.0,
            within_prep_time: 2.0,
            over_prep_time: -1.0,
            dietary_match: 3.0,
            excluded_ingredient: -10.0,
        }
    }
}

pub trait RecipeScorer: Send + Sync {
    fn score(&self, recipe: &Recipe, preferences: &UserPreferences) -> f64;
}

/// Deterministic, stateless scorer. Name matching for the availability and
/// exclusion terms is exact and unit-blind.
#[derive(Clone, Debug, Default)]
pub struct WeightedRecipeScorer {
    weights: ScoringWeights,
}

impl WeightedRecipeScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl RecipeScorer for WeightedRecipeScorer {
    fn score(&self, recipe: &Recipe, preferences: &UserPreferences) -> f64 {
        let mut score = 0.0;

        let available: BTreeSet<&str> =
            preferences.available_ingredients.iter().map(|ing| ing.name.as_str()).collect();
        let required: BTreeSet<&str> =
            recipe.required_ingredients.iter().map(|ing| ing.name.as_str()).collect();

        if !required.is_empty() {
            let on_hand = required.intersection(&available).count();
            score += self.weights.availability * on_hand as f64 / required.len() as f64;
        }

        if let Some(max_minutes) = preferences.max_preparation_time {
            if recipe.preparation_time <= max_minutes {
                score += self.weights.within_prep_time;
            } else {
                score += self.weights.over_prep_time;
            }
        }

        if recipe.suits(preferences.dietary_preference) {
            score += self.weights.dietary_match;
        }

        // Applied once, no matter how many excluded names the recipe uses.
        let uses_excluded = preferences
            .excluded_ingredients
            .iter()
            .any(|excluded| required.contains(excluded.as_str()));
        if uses_excluded {
            score += self.weights.excluded_ingredient;
        }

        score
    }
}
