//! The meal-planning engine: per-slot selection, availability matching, and
//! plan assembly. Everything here is deterministic and free of I/O; the only
//! mutable state in the crate lives in [`crate::history::PlanHistory`], which
//! callers pass in by reference.

pub mod assembler;
pub mod matcher;
pub mod scorer;
pub mod selector;
pub mod shopping;

use chrono::NaiveDate;

use crate::domain::meal::{Meal, MealPlan};
use crate::domain::preferences::UserPreferences;
use crate::domain::recipe::{MealSlot, Recipe};
use crate::errors::DomainError;
use crate::history::PlanHistory;

use self::scorer::{RecipeScorer, WeightedRecipeScorer};

/// Facade over the full planning flow: select a recipe per slot, match each
/// against the available pool, and assemble the day's plan.
///
/// A plan either fully succeeds with three meals or fails with the first
/// slot that has no candidate; slots within one run are independent and a
/// recipe chosen for breakfast is not excluded from lunch scoring.
pub struct MealPlanner<S = WeightedRecipeScorer> {
    scorer: S,
}

impl Default for MealPlanner<WeightedRecipeScorer> {
    fn default() -> Self {
        Self::new(WeightedRecipeScorer::default())
    }
}

impl<S: RecipeScorer> MealPlanner<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn plan_day(
        &self,
        date: NaiveDate,
        candidates: &[Recipe],
        preferences: &UserPreferences,
        history: &PlanHistory,
    ) -> Result<MealPlan, DomainError> {
        let breakfast = self.build_meal(candidates, MealSlot::Breakfast, preferences, history)?;
        let lunch = self.build_meal(candidates, MealSlot::Lunch, preferences, history)?;
        let dinner = self.build_meal(candidates, MealSlot::Dinner, preferences, history)?;

        Ok(assembler::assemble(date, breakfast, lunch, dinner))
    }

    fn build_meal(
        &self,
        candidates: &[Recipe],
        slot: MealSlot,
        preferences: &UserPreferences,
        history: &PlanHistory,
    ) -> Result<Meal, DomainError> {
        let recipe =
            selector::select_for_slot(candidates, slot, preferences, &self.scorer, history)?;
        let matched = matcher::match_ingredients(
            &recipe.required_ingredients,
            &preferences.available_ingredients,
        );

        Ok(Meal {
            recipe: recipe.clone(),
            used_ingredients: matched.used,
            missing_ingredients: matched.missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::ingredient::Ingredient;
    use crate::domain::preferences::UserPreferences;
    use crate::domain::recipe::{DietaryPreference, MealSlot, Recipe, RecipeId};
    use crate::errors::DomainError;
    use crate::history::PlanHistory;

    use super::MealPlanner;

    fn ing(name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient::new(name, quantity, unit).expect("valid test ingredient")
    }

    fn recipe(id: &str, slot: MealSlot, required: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: RecipeId(id.to_string()),
            name: format!("recipe {id}"),
            meal_type: slot,
            description: String::new(),
            required_ingredients: required,
            instructions: vec![],
            preparation_time: 20,
            dietary_preferences: vec![DietaryPreference::None],
            cuisine_type: "Indian".to_string(),
        }
    }

    #[test]
    fn plans_all_three_slots_and_consolidates_shopping() {
        let candidates = vec![
            recipe("b", MealSlot::Breakfast, vec![ing("rice", 1.0, "cup"), ing("sugar", 1.0, "cup")]),
            recipe("l", MealSlot::Lunch, vec![ing("sugar", 1.0, "cup")]),
            recipe("d", MealSlot::Dinner, vec![ing("rice", 2.0, "cup"), ing("onion", 1.0, "piece")]),
        ];
        let preferences = UserPreferences {
            available_ingredients: vec![ing("rice", 3.0, "cup")],
            ..UserPreferences::default()
        };
        let history = PlanHistory::with_default_window();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let plan = MealPlanner::default()
            .plan_day(date, &candidates, &preferences, &history)
            .expect("plan");

        assert_eq!(plan.breakfast.recipe.id, RecipeId("b".to_string()));
        assert_eq!(plan.breakfast.used_ingredients, vec![ing("rice", 1.0, "cup")]);
        assert_eq!(plan.breakfast.missing_ingredients, vec![ing("sugar", 1.0, "cup")]);
        // Sugar is missing from breakfast and lunch; consolidated once.
        assert_eq!(
            plan.shopping_list,
            vec![ing("sugar", 2.0, "cup"), ing("onion", 1.0, "piece")]
        );
    }

    #[test]
    fn missing_slot_fails_the_whole_run() {
        let candidates = vec![
            recipe("b", MealSlot::Breakfast, vec![]),
            recipe("d", MealSlot::Dinner, vec![]),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let error = MealPlanner::default()
            .plan_day(
                date,
                &candidates,
                &UserPreferences::default(),
                &PlanHistory::with_default_window(),
            )
            .expect_err("no lunch candidates");

        assert_eq!(error, DomainError::NoCandidateForSlot { slot: MealSlot::Lunch });
    }

    #[test]
    fn slots_within_one_run_are_independent() {
        // The same recipe id serves breakfast and lunch when it is the only
        // candidate for both slots' meal types; only cross-run recency
        // excludes repeats.
        let candidates = vec![
            recipe("same", MealSlot::Breakfast, vec![]),
            recipe("same-lunch", MealSlot::Lunch, vec![]),
            recipe("d", MealSlot::Dinner, vec![]),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let plan = MealPlanner::default()
            .plan_day(
                date,
                &candidates,
                &UserPreferences::default(),
                &PlanHistory::with_default_window(),
            )
            .expect("plan");

        assert_eq!(plan.breakfast.recipe.id, RecipeId("same".to_string()));
        assert_eq!(plan.lunch.recipe.id, RecipeId("same-lunch".to_string()));
    }
}
