use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ingredient::Ingredient;
use crate::domain::recipe::{Recipe, RecipeId};

/// A chosen recipe together with the partition of its required ingredients
/// into those on hand and those to buy. `used_ingredients` and
/// `missing_ingredients` together reconstruct `recipe.required_ingredients`
/// exactly once each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub recipe: Recipe,
    pub used_ingredients: Vec<Ingredient>,
    pub missing_ingredients: Vec<Ingredient>,
}

/// One full day's plan. Created once per planning run; immutable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub date: NaiveDate,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub shopping_list: Vec<Ingredient>,
}

impl MealPlan {
    pub fn meals(&self) -> [&Meal; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    pub fn recipe_ids(&self) -> [&RecipeId; 3] {
        [&self.breakfast.recipe.id, &self.lunch.recipe.id, &self.dinner.recipe.id]
    }
}
