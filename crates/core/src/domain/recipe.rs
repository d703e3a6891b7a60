use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ingredient::Ingredient;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub String);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The meal-type partition candidates are filtered by during selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!("unknown meal slot `{other}` (expected breakfast|lunch|dinner)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

/// A candidate recipe as handed to the engine by a recipe source.
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub meal_type: MealSlot,
    pub description: String,
    pub required_ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub preparation_time: u32,
    pub dietary_preferences: Vec<DietaryPreference>,
    pub cuisine_type: String,
}

impl Recipe {
    pub fn suits(&self, preference: DietaryPreference) -> bool {
        self.dietary_preferences.contains(&preference)
    }
}

#[cfg(test)]
mod tests {
    use super::{DietaryPreference, MealSlot};

    #[test]
    fn meal_slot_parses_case_insensitively() {
        assert_eq!("Breakfast".parse::<MealSlot>().unwrap(), MealSlot::Breakfast);
        assert_eq!(" dinner ".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn meal_slot_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MealSlot::Lunch).unwrap(), "\"lunch\"");
    }

    #[test]
    fn dietary_preference_defaults_to_none() {
        assert_eq!(DietaryPreference::default(), DietaryPreference::None);
    }
}
