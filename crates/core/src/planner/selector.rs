use crate::domain::preferences::UserPreferences;
use crate::domain::recipe::{MealSlot, Recipe};
use crate::errors::DomainError;
use crate::history::PlanHistory;
use crate::planner::scorer::RecipeScorer;

/// Pick the best candidate for one slot.
///
/// Candidates are filtered to the slot, recently used recipes are dropped,
/// and the survivor with the highest score wins. Ties go to the first
/// maximum encountered, via a stable linear scan rather than a sort. When
/// recency excludes every candidate, selection falls back to the first
/// slot-filtered candidate in original order; an empty slot is an error.
pub fn select_for_slot<'a>(
    candidates: &'a [Recipe],
    slot: MealSlot,
    preferences: &UserPreferences,
    scorer: &dyn RecipeScorer,
    history: &PlanHistory,
) -> Result<&'a Recipe, DomainError> {
    let in_slot: Vec<&Recipe> =
        candidates.iter().filter(|recipe| recipe.meal_type == slot).collect();

    let mut best: Option<(&Recipe, f64)> = None;
    for &recipe in &in_slot {
        if history.is_recent(&recipe.id) {
            continue;
        }

        let score = scorer.score(recipe, preferences);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((recipe, score)),
        }
    }

    if let Some((recipe, _)) = best {
        return Ok(recipe);
    }

    // Everything in the slot was recently used; repeating a recipe beats
    // serving nothing.
    in_slot.first().copied().ok_or(DomainError::NoCandidateForSlot { slot })
}
