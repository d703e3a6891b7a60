use std::fmt::Write;

use chrono::NaiveDate;

use crate::domain::meal::{Meal, MealPlan};
use crate::planner::shopping;

/// Compose a dated, immutable plan from the three chosen meals, computing the
/// consolidated shopping list along the way.
pub fn assemble(date: NaiveDate, breakfast: Meal, lunch: Meal, dinner: Meal) -> MealPlan {
    let shopping_list = shopping::consolidate(&[&breakfast, &lunch, &dinner]);

    MealPlan { date, breakfast, lunch, dinner, shopping_list }
}

/// Human-readable text report: one section per meal (recipe, description,
/// used and missing ingredients) followed by the shopping list.
pub fn render(plan: &MealPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Meal Plan for {}", plan.date);

    for (label, meal) in
        [("Breakfast", &plan.breakfast), ("Lunch", &plan.lunch), ("Dinner", &plan.dinner)]
    {
        let _ = writeln!(out, "\n=== {label} ===");
        let _ = writeln!(out, "Recipe: {}", meal.recipe.name);
        let _ = writeln!(out, "Description: {}", meal.recipe.description);
        let _ = writeln!(out, "\nUsing:");
        for ingredient in &meal.used_ingredients {
            let _ = writeln!(out, "- {ingredient}");
        }
        let _ = writeln!(out, "\nMissing:");
        for ingredient in &meal.missing_ingredients {
            let _ = writeln!(out, "- {ingredient}");
        }
    }

    let _ = writeln!(out, "\n=== Shopping List ===");
    for ingredient in &plan.shopping_list {
        let _ = writeln!(out, "- {ingredient}");
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::ingredient::Ingredient;
    use crate::domain::meal::Meal;
    use crate::domain::recipe::{DietaryPreference, MealSlot, Recipe, RecipeId};

    use super::{assemble, render};

    fn ing(name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient::new(name, quantity, unit).expect("valid test ingredient")
    }

    fn meal(id: &str, slot: MealSlot, used: Vec<Ingredient>, missing: Vec<Ingredient>) -> Meal {
        let mut required = used.clone();
        required.extend(missing.clone());
        Meal {
            recipe: Recipe {
                id: RecipeId(id.to_string()),
                name: format!("Dish {id}"),
                meal_type: slot,
                description: format!("description of {id}"),
                required_ingredients: required,
                instructions: vec!["cook".to_string()],
                preparation_time: 25,
                dietary_preferences: vec![DietaryPreference::Vegetarian],
                cuisine_type: "Indian".to_string(),
            },
            used_ingredients: used,
            missing_ingredients: missing,
        }
    }

    fn sample_plan() -> crate::domain::meal::MealPlan {
        assemble(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            meal("b", MealSlot::Breakfast, vec![ing("rice", 1.0, "cup")], vec![ing("sugar", 1.0, "cup")]),
            meal("l", MealSlot::Lunch, vec![], vec![ing("sugar", 1.0, "cup")]),
            meal("d", MealSlot::Dinner, vec![ing("rice", 2.0, "cup")], vec![ing("onion", 1.0, "piece")]),
        )
    }

    #[test]
    fn assemble_consolidates_shopping_list_across_meals() {
        let plan = sample_plan();

        assert_eq!(
            plan.shopping_list,
            vec![ing("sugar", 2.0, "cup"), ing("onion", 1.0, "piece")]
        );
    }

    #[test]
    fn render_keeps_section_order() {
        let report = render(&sample_plan());

        let breakfast = report.find("=== Breakfast ===").expect("breakfast section");
        let lunch = report.find("=== Lunch ===").expect("lunch section");
        let dinner = report.find("=== Dinner ===").expect("dinner section");
        let shopping = report.find("=== Shopping List ===").expect("shopping section");

        assert!(report.starts_with("Meal Plan for 2025-03-10"));
        assert!(breakfast < lunch && lunch < dinner && dinner < shopping);
    }

    #[test]
    fn render_lists_used_missing_and_shopping_entries() {
        let report = render(&sample_plan());

        assert!(report.contains("Recipe: Dish b"));
        assert!(report.contains("Description: description of d"));
        assert!(report.contains("- 1 cup rice"));
        assert!(report.contains("- 2 cup sugar"));
        assert!(report.contains("- 1 piece onion"));
    }
}
