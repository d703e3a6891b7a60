use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use platewise_core::{
    DietaryPreference, Ingredient, MealSlot, Recipe, RecipeId, UserPreferences,
};

use crate::llm::LlmClient;

/// Produces the candidate recipe pool the planner selects from. May return an
/// empty list; the caller decides how to surface that.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn candidate_recipes(&self, preferences: &UserPreferences) -> Result<Vec<Recipe>>;
}

/// In-process recipe catalog; the default source when no LLM is configured.
pub struct BuiltinRecipeSource {
    catalog: Vec<Recipe>,
}

impl BuiltinRecipeSource {
    pub fn new(cuisine: &str) -> Self {
        Self { catalog: builtin_catalog(cuisine) }
    }

    pub fn with_catalog(catalog: Vec<Recipe>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl RecipeSource for BuiltinRecipeSource {
    async fn candidate_recipes(&self, preferences: &UserPreferences) -> Result<Vec<Recipe>> {
        let candidates: Vec<Recipe> = self
            .catalog
            .iter()
            .filter(|recipe| {
                // A user with no dietary preference can eat anything.
                preferences.dietary_preference == DietaryPreference::None
                    || recipe.suits(preferences.dietary_preference)
            })
            .filter(|recipe| {
                preferences
                    .max_preparation_time
                    .map(|max| recipe.preparation_time <= max)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        debug!(
            event_name = "agent.recipes.builtin_filtered",
            total = self.catalog.len(),
            matching = candidates.len(),
            "filtered builtin catalog"
        );

        Ok(candidates)
    }
}

/// Prompts an LLM for candidate recipes and parses its free-form reply into
/// validated records. Parsing is strict per recipe: a malformed entry fails
/// the batch rather than shrinking it silently.
pub struct LlmRecipeSource {
    client: Arc<dyn LlmClient>,
    cuisine: String,
}

impl LlmRecipeSource {
    pub fn new(client: Arc<dyn LlmClient>, cuisine: impl Into<String>) -> Self {
        Self { client, cuisine: cuisine.into() }
    }

    fn build_prompt(&self, preferences: &UserPreferences) -> String {
        let pantry = preferences
            .available_ingredients
            .iter()
            .map(Ingredient::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let excluded = if preferences.excluded_ingredients.is_empty() {
            "none".to_string()
        } else {
            preferences.excluded_ingredients.join(", ")
        };
        let max_time = preferences
            .max_preparation_time
            .map(|minutes| format!("{minutes} minutes"))
            .unwrap_or_else(|| "no limit".to_string());

        format!(
            "Suggest {cuisine} recipes for breakfast, lunch, and dinner (at least two per \
             meal type). The cook has: {pantry}. Dietary preference: {dietary:?}. Excluded \
             ingredients: {excluded}. Maximum preparation time: {max_time}.\n\
             Reply with ONLY a JSON array. Each element must have: name, meal_type \
             (breakfast|lunch|dinner), description, required_ingredients (array of \
             {{name, quantity, unit}}), instructions (array of strings), preparation_time \
             (integer minutes), dietary_preferences (array drawn from \
             none|vegetarian|vegan|keto|paleo), cuisine_type.",
            cuisine = self.cuisine,
            dietary = preferences.dietary_preference,
        )
    }
}

#[async_trait]
impl RecipeSource for LlmRecipeSource {
    async fn candidate_recipes(&self, preferences: &UserPreferences) -> Result<Vec<Recipe>> {
        let prompt = self.build_prompt(preferences);
        let reply = self.client.complete(&prompt).await.context("recipe generation failed")?;
        let recipes = parse_recipe_reply(&reply)?;

        info!(
            event_name = "agent.recipes.llm_parsed",
            count = recipes.len(),
            "parsed candidate recipes from llm reply"
        );

        Ok(recipes)
    }
}

/// Extract and validate a recipe array from a model reply. Tolerates code
/// fences and prose around the array; everything inside it must be
/// well-formed.
pub fn parse_recipe_reply(reply: &str) -> Result<Vec<Recipe>> {
    let json = extract_json_array(reply)
        .ok_or_else(|| anyhow!("llm reply did not contain a JSON array"))?;
    let drafts: Vec<RecipeDraft> =
        serde_json::from_str(json).context("llm reply was not a valid recipe array")?;

    drafts.into_iter().map(RecipeDraft::into_recipe).collect()
}

fn extract_json_array(reply: &str) -> Option<&str> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    (end > start).then(|| &reply[start..=end])
}

#[derive(Debug, Deserialize)]
struct RecipeDraft {
    #[serde(default)]
    id: Option<String>,
    name: String,
    meal_type: String,
    #[serde(default)]
    description: String,
    required_ingredients: Vec<IngredientDraft>,
    #[serde(default)]
    instructions: Vec<String>,
    preparation_time: u32,
    #[serde(default)]
    dietary_preferences: Vec<DietaryPreference>,
    #[serde(default)]
    cuisine_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngredientDraft {
    name: String,
    quantity: f64,
    unit: String,
}

impl RecipeDraft {
    fn into_recipe(self) -> Result<Recipe> {
        let meal_type: MealSlot = self
            .meal_type
            .parse()
            .map_err(|message: String| anyhow!("recipe `{}`: {message}", self.name))?;

        let required_ingredients = self
            .required_ingredients
            .into_iter()
            .map(|draft| Ingredient::new(draft.name, draft.quantity, draft.unit))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("recipe `{}` has a malformed ingredient", self.name))?;

        Ok(Recipe {
            id: RecipeId(self.id.unwrap_or_else(|| Uuid::new_v4().to_string())),
            name: self.name,
            meal_type,
            description: self.description,
            required_ingredients,
            instructions: self.instructions,
            preparation_time: self.preparation_time,
            dietary_preferences: self.dietary_preferences,
            cuisine_type: self.cuisine_type.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

fn builtin_catalog(cuisine: &str) -> Vec<Recipe> {
    let ing = |name: &str, quantity: f64, unit: &str| Ingredient {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    };
    let steps = |steps: &[&str]| steps.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Recipe {
            id: RecipeId("builtin-masala-dosa".to_string()),
            name: "Masala Dosa".to_string(),
            meal_type: MealSlot::Breakfast,
            description: "Crispy rice and lentil crepe with potato filling".to_string(),
            required_ingredients: vec![
                ing("rice", 1.0, "cup"),
                ing("urad dal", 0.5, "cup"),
                ing("potatoes", 2.0, "pieces"),
            ],
            instructions: steps(&["Soak rice and dal", "Grind to paste", "Ferment", "Make dosa"]),
            preparation_time: 45,
            dietary_preferences: vec![DietaryPreference::Vegetarian, DietaryPreference::Vegan],
            cuisine_type: cuisine.to_string(),
        },
        Recipe {
            id: RecipeId("builtin-poha".to_string()),
            name: "Poha".to_string(),
            meal_type: MealSlot::Breakfast,
            description: "Flattened rice with peanuts and spices".to_string(),
            required_ingredients: vec![
                ing("poha", 2.0, "cups"),
                ing("peanuts", 0.5, "cup"),
                ing("onions", 1.0, "piece"),
            ],
            instructions: steps(&["Soak poha", "Roast peanuts", "Cook with spices"]),
            preparation_time: 20,
            dietary_preferences: vec![DietaryPreference::Vegetarian, DietaryPreference::Vegan],
            cuisine_type: cuisine.to_string(),
        },
        Recipe {
            id: RecipeId("builtin-butter-chicken".to_string()),
            name: "Butter Chicken".to_string(),
            meal_type: MealSlot::Lunch,
            description: "Creamy tomato-based curry with tender chicken".to_string(),
            required_ingredients: vec![
                ing("chicken", 500.0, "grams"),
                ing("tomatoes", 4.0, "pieces"),
                ing("cream", 200.0, "ml"),
            ],
            instructions: steps(&["Marinate chicken", "Make gravy", "Cook chicken"]),
            preparation_time: 60,
            dietary_preferences: vec![DietaryPreference::None],
            cuisine_type: cuisine.to_string(),
        },
        Recipe {
            id: RecipeId("builtin-veg-biryani".to_string()),
            name: "Vegetable Biryani".to_string(),
            meal_type: MealSlot::Lunch,
            description: "Fragrant rice dish with mixed vegetables and aromatic spices"
                .to_string(),
            required_ingredients: vec![
                ing("rice", 2.0, "cups"),
                ing("mixed vegetables", 500.0, "grams"),
                ing("onions", 2.0, "pieces"),
            ],
            instructions: steps(&["Cook rice", "Prepare vegetables", "Layer and steam"]),
            preparation_time: 50,
            dietary_preferences: vec![DietaryPreference::Vegetarian, DietaryPreference::Vegan],
            cuisine_type: cuisine.to_string(),
        },
        Recipe {
            id: RecipeId("builtin-palak-paneer".to_string()),
            name: "Palak Paneer".to_string(),
            meal_type: MealSlot::Dinner,
            description: "Cottage cheese cubes in creamy spinach gravy".to_string(),
            required_ingredients: vec![
                ing("spinach", 500.0, "grams"),
                ing("paneer", 200.0, "grams"),
                ing("onions", 2.0, "pieces"),
            ],
            instructions: steps(&["Blanch spinach", "Prepare gravy", "Cook paneer"]),
            preparation_time: 40,
            dietary_preferences: vec![DietaryPreference::Vegetarian],
            cuisine_type: cuisine.to_string(),
        },
        Recipe {
            id: RecipeId("builtin-dal-khichdi".to_string()),
            name: "Dal Khichdi".to_string(),
            meal_type: MealSlot::Dinner,
            description: "One-pot rice and lentil comfort dish".to_string(),
            required_ingredients: vec![
                ing("rice", 1.0, "cup"),
                ing("moong dal", 0.5, "cup"),
                ing("ghee", 2.0, "tbsp"),
            ],
            instructions: steps(&["Rinse rice and dal", "Pressure cook", "Temper with ghee"]),
            preparation_time: 30,
            dietary_preferences: vec![DietaryPreference::Vegetarian],
            cuisine_type: cuisine.to_string(),
        },
    ]
}
