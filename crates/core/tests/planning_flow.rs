//! End-to-end engine flow: candidate recipes in, dated plan with a
//! consolidated shopping list out, recency recorded across runs.

use chrono::{Duration, NaiveDate};
use platewise_core::history::PlanHistory;
use platewise_core::planner::assembler;
use platewise_core::{
    DietaryPreference, Ingredient, MealPlanner, MealSlot, Recipe, RecipeId, UserPreferences,
};

fn ing(name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient::new(name, quantity, unit).expect("valid test ingredient")
}

fn recipe(id: &str, slot: MealSlot, required: Vec<Ingredient>, prep: u32) -> Recipe {
    Recipe {
        id: RecipeId(id.to_string()),
        name: format!("Dish {id}"),
        meal_type: slot,
        description: format!("a {slot} dish"),
        required_ingredients: required,
        instructions: vec!["prep".to_string(), "cook".to_string()],
        preparation_time: prep,
        dietary_preferences: vec![DietaryPreference::Vegetarian],
        cuisine_type: "Indian".to_string(),
    }
}

fn catalog() -> Vec<Recipe> {
    vec![
        recipe(
            "dosa",
            MealSlot::Breakfast,
            vec![ing("rice", 1.0, "cup"), ing("urad dal", 0.5, "cup")],
            45,
        ),
        recipe("poha", MealSlot::Breakfast, vec![ing("flattened rice", 1.0, "cup")], 15),
        recipe(
            "dal tadka",
            MealSlot::Lunch,
            vec![ing("toor dal", 1.0, "cup"), ing("onion", 1.0, "piece")],
            35,
        ),
        recipe("veg biryani", MealSlot::Lunch, vec![ing("rice", 2.0, "cup")], 60),
        recipe(
            "paneer curry",
            MealSlot::Dinner,
            vec![ing("paneer", 200.0, "gram"), ing("onion", 2.0, "piece")],
            40,
        ),
        recipe("khichdi", MealSlot::Dinner, vec![ing("rice", 1.0, "cup")], 30),
    ]
}

fn pantry_preferences() -> UserPreferences {
    UserPreferences {
        dietary_preference: DietaryPreference::Vegetarian,
        available_ingredients: vec![ing("rice", 3.0, "cup"), ing("onion", 1.0, "piece")],
        excluded_ingredients: vec![],
        max_preparation_time: Some(45),
    }
}

#[test]
fn full_day_plan_selects_matches_and_aggregates() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let planner = MealPlanner::default();
    let history = PlanHistory::with_default_window();

    let plan = planner
        .plan_day(today, &catalog(), &pantry_preferences(), &history)
        .expect("full day plan");

    assert_eq!(plan.date, today);
    assert_eq!(plan.breakfast.recipe.meal_type, MealSlot::Breakfast);
    assert_eq!(plan.lunch.recipe.meal_type, MealSlot::Lunch);
    assert_eq!(plan.dinner.recipe.meal_type, MealSlot::Dinner);

    // Every meal's partition reconstructs its recipe's requirements.
    for meal in plan.meals() {
        assert_eq!(
            meal.used_ingredients.len() + meal.missing_ingredients.len(),
            meal.recipe.required_ingredients.len()
        );
    }

    // Everything on the shopping list was missing somewhere.
    for entry in &plan.shopping_list {
        let missing_somewhere = plan
            .meals()
            .iter()
            .flat_map(|meal| &meal.missing_ingredients)
            .any(|missing| missing.same_kind(entry));
        assert!(missing_somewhere, "unexpected shopping entry {entry}");
    }
}

#[test]
fn recorded_plans_steer_the_next_run_away_from_repeats() {
    let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let tuesday = monday + Duration::days(1);
    let planner = MealPlanner::default();
    let mut history = PlanHistory::with_default_window();
    let preferences = pantry_preferences();
    let candidates = catalog();

    let first = planner.plan_day(monday, &candidates, &preferences, &history).expect("first plan");
    history.record(first.clone(), monday);

    let second =
        planner.plan_day(tuesday, &candidates, &preferences, &history).expect("second plan");

    assert_ne!(first.breakfast.recipe.id, second.breakfast.recipe.id);
    assert_ne!(first.lunch.recipe.id, second.lunch.recipe.id);
    assert_ne!(first.dinner.recipe.id, second.dinner.recipe.id);
}

#[test]
fn exhausted_slots_fall_back_to_repeats_rather_than_failing() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let planner = MealPlanner::default();
    let mut history = PlanHistory::with_default_window();
    let preferences = pantry_preferences();
    let candidates = catalog();

    // Two recipes per slot: after two recorded days everything is recent.
    for offset in 0..2 {
        let date = start + Duration::days(offset);
        let plan = planner.plan_day(date, &candidates, &preferences, &history).expect("plan");
        history.record(plan, date);
    }

    let third = planner
        .plan_day(start + Duration::days(2), &candidates, &preferences, &history)
        .expect("fallback plan");

    // Fallback ignores score and takes the first candidate per slot.
    assert_eq!(third.breakfast.recipe.id, RecipeId("dosa".to_string()));
    assert_eq!(third.lunch.recipe.id, RecipeId("dal tadka".to_string()));
    assert_eq!(third.dinner.recipe.id, RecipeId("paneer curry".to_string()));
}

#[test]
fn rendered_report_covers_every_section() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let planner = MealPlanner::default();
    let history = PlanHistory::with_default_window();

    let plan = planner.plan_day(today, &catalog(), &pantry_preferences(), &history).expect("plan");
    let report = assembler::render(&plan);

    for section in ["=== Breakfast ===", "=== Lunch ===", "=== Dinner ===", "=== Shopping List ==="]
    {
        assert!(report.contains(section), "missing section {section}");
    }
    assert!(report.contains(&plan.breakfast.recipe.name));
}
