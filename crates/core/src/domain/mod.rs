pub mod ingredient;
pub mod meal;
pub mod preferences;
pub mod recipe;

pub use ingredient::Ingredient;
pub use meal::{Meal, MealPlan};
pub use preferences::UserPreferences;
pub use recipe::{DietaryPreference, MealSlot, Recipe, RecipeId};
