//! Plan history and recency memory.
//!
//! `PlanHistory` is the only component allowed to mutate the stored plans and
//! the recent-recipe set. Callers inject "today" on every `record` so tests
//! can drive the recency window deterministically.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};

use crate::domain::meal::MealPlan;
use crate::domain::recipe::RecipeId;

pub const DEFAULT_RECENCY_WINDOW_DAYS: u32 = 7;

#[derive(Clone, Debug)]
pub struct PlanHistory {
    plans: BTreeMap<NaiveDate, MealPlan>,
    recent_ids: HashSet<RecipeId>,
    window_days: u32,
}

impl PlanHistory {
    pub fn new(window_days: u32) -> Self {
        Self { plans: BTreeMap::new(), recent_ids: HashSet::new(), window_days }
    }

    pub fn with_default_window() -> Self {
        Self::new(DEFAULT_RECENCY_WINDOW_DAYS)
    }

    /// Store a plan (overwriting any plan already recorded for its date), mark
    /// its three recipes as recent, then prune expired recency entries.
    ///
    /// `today` is the wall-clock date at record time, not the plan date.
    pub fn record(&mut self, plan: MealPlan, today: NaiveDate) {
        for id in plan.recipe_ids() {
            self.recent_ids.insert(id.clone());
        }
        self.plans.insert(plan.date, plan);
        self.evict_expired(today);
    }

    pub fn is_recent(&self, id: &RecipeId) -> bool {
        self.recent_ids.contains(id)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&MealPlan> {
        self.plans.get(&date)
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    /// Recompute recency from full history. Plans dated strictly before
    /// `today - window` are old; their recipe ids leave the recent set unless
    /// a plan on or after the cutoff still references the same id. A plan
    /// dated exactly `window` days ago sits on the cutoff and stays recent.
    /// Plans themselves are never deleted.
    fn evict_expired(&mut self, today: NaiveDate) {
        let cutoff = today - Duration::days(i64::from(self.window_days));

        let mut expired: HashSet<RecipeId> = HashSet::new();
        let mut retained: HashSet<&RecipeId> = HashSet::new();
        for (date, plan) in &self.plans {
            if *date < cutoff {
                expired.extend(plan.recipe_ids().into_iter().cloned());
            } else {
                retained.extend(plan.recipe_ids());
            }
        }

        for id in expired {
            if !retained.contains(&id) {
                self.recent_ids.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use crate::domain::ingredient::Ingredient;
    use crate::domain::meal::{Meal, MealPlan};
    use crate::domain::recipe::{DietaryPreference, MealSlot, Recipe, RecipeId};
    use crate::planner::assembler;

    use super::PlanHistory;

    fn recipe(id: &str, slot: MealSlot) -> Recipe {
        Recipe {
            id: RecipeId(id.to_string()),
            name: format!("recipe {id}"),
            meal_type: slot,
            description: String::new(),
            required_ingredients: vec![Ingredient::new("rice", 1.0, "cup").unwrap()],
            instructions: vec!["cook".to_string()],
            preparation_time: 20,
            dietary_preferences: vec![DietaryPreference::Vegetarian],
            cuisine_type: "Indian".to_string(),
        }
    }

    fn meal(id: &str, slot: MealSlot) -> Meal {
        Meal { recipe: recipe(id, slot), used_ingredients: vec![], missing_ingredients: vec![] }
    }

    fn plan(date: NaiveDate, b: &str, l: &str, d: &str) -> MealPlan {
        assembler::assemble(
            date,
            meal(b, MealSlot::Breakfast),
            meal(l, MealSlot::Lunch),
            meal(d, MealSlot::Dinner),
        )
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn records_mark_all_three_recipes_recent() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today, "b1", "l1", "d1"), today);

        for id in ["b1", "l1", "d1"] {
            assert!(history.is_recent(&RecipeId(id.to_string())));
        }
        assert!(!history.is_recent(&RecipeId("other".to_string())));
    }

    #[test]
    fn stored_plans_are_retrievable_by_date() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today, "b1", "l1", "d1"), today);

        assert!(history.get(today).is_some());
        assert!(history.get(today + Duration::days(1)).is_none());
    }

    #[test]
    fn plan_eight_days_old_leaves_the_recent_set() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today - Duration::days(8), "b1", "l1", "d1"), today);

        assert!(!history.is_recent(&RecipeId("b1".to_string())));
        // The plan itself is never deleted.
        assert!(history.get(today - Duration::days(8)).is_some());
    }

    #[test]
    fn plan_six_days_old_stays_recent() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today - Duration::days(6), "b1", "l1", "d1"), today);

        assert!(history.is_recent(&RecipeId("b1".to_string())));
    }

    #[test]
    fn plan_exactly_seven_days_old_sits_on_the_cutoff_and_stays_recent() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today - Duration::days(7), "b1", "l1", "d1"), today);

        assert!(history.is_recent(&RecipeId("b1".to_string())));
    }

    #[test]
    fn recipe_in_both_old_and_fresh_plans_stays_recent() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today - Duration::days(9), "b1", "l1", "d1"), today);
        history.record(plan(today - Duration::days(2), "b1", "l2", "d2"), today);

        // b1 appears in an expired plan, but the fresh plan keeps it recent.
        assert!(history.is_recent(&RecipeId("b1".to_string())));
        assert!(!history.is_recent(&RecipeId("l1".to_string())));
        assert!(!history.is_recent(&RecipeId("d1".to_string())));
    }

    #[test]
    fn recording_for_the_same_date_overwrites() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::with_default_window();
        history.record(plan(today, "b1", "l1", "d1"), today);
        history.record(plan(today, "b2", "l2", "d2"), today);

        assert_eq!(history.plan_count(), 1);
        assert_eq!(history.get(today).unwrap().breakfast.recipe.id, RecipeId("b2".to_string()));
    }

    #[test]
    fn custom_window_length_is_honoured() {
        let today = day("2025-03-10");
        let mut history = PlanHistory::new(3);
        history.record(plan(today - Duration::days(4), "b1", "l1", "d1"), today);
        history.record(plan(today - Duration::days(2), "b2", "l2", "d2"), today);

        assert!(!history.is_recent(&RecipeId("b1".to_string())));
        assert!(history.is_recent(&RecipeId("b2".to_string())));
    }
}
