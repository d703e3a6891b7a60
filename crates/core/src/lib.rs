pub mod config;
pub mod domain;
pub mod errors;
pub mod history;
pub mod planner;

pub use domain::ingredient::Ingredient;
pub use domain::meal::{Meal, MealPlan};
pub use domain::preferences::UserPreferences;
pub use domain::recipe::{DietaryPreference, MealSlot, Recipe, RecipeId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use history::PlanHistory;
pub use planner::matcher::{match_ingredients, IngredientMatch};
pub use planner::scorer::{RecipeScorer, ScoringWeights, WeightedRecipeScorer};
pub use planner::MealPlanner;
