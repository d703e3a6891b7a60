use serde::{Deserialize, Serialize};

use crate::domain::ingredient::Ingredient;
use crate::domain::recipe::DietaryPreference;

/// What the user wants and what they already have. Exclusions are matched by
/// ingredient name only (case-sensitive, unit ignored).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub dietary_preference: DietaryPreference,
    pub available_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
    #[serde(default)]
    pub max_preparation_time: Option<u32>,
}
