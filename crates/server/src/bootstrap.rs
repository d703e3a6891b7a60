use std::sync::Arc;

use platewise_agent::{BuiltinRecipeSource, HttpLlmClient, LlmRecipeSource, RecipeSource};
use platewise_core::config::{AppConfig, ConfigError, RecipeSourceKind};
use platewise_core::history::PlanHistory;
use platewise_core::MealPlanner;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub planner: Arc<MealPlanner>,
    pub history: Arc<Mutex<PlanHistory>>,
    pub recipe_source: Arc<dyn RecipeSource>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("llm client initialization failed: {0}")]
    LlmClient(String),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let history = Arc::new(Mutex::new(PlanHistory::new(config.planner.recency_window_days)));

    let (recipe_source, source_label): (Arc<dyn RecipeSource>, &str) =
        match config.planner.recipe_source {
            RecipeSourceKind::Builtin => {
                (Arc::new(BuiltinRecipeSource::new(&config.planner.default_cuisine)), "builtin")
            }
            RecipeSourceKind::Llm => {
                let client = HttpLlmClient::from_config(&config.llm)
                    .map_err(|error| BootstrapError::LlmClient(error.to_string()))?;
                let source = LlmRecipeSource::new(
                    Arc::new(client),
                    config.planner.default_cuisine.clone(),
                );
                (Arc::new(source), "llm")
            }
        };

    info!(
        event_name = "system.bootstrap.recipe_source_ready",
        correlation_id = "bootstrap",
        source = source_label,
        recency_window_days = config.planner.recency_window_days,
        "recipe source initialized"
    );

    Ok(Application { config, planner: Arc::new(MealPlanner::default()), history, recipe_source })
}
