//! Meal-plan API routes.
//!
//! - `POST /api/v1/meal-plans`               — generate and record today's plan
//! - `GET  /api/v1/meal-plans/{date}`        — fetch a stored plan (JSON)
//! - `GET  /api/v1/meal-plans/{date}/report` — plain-text rendering of a plan

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use platewise_agent::RecipeSource;
use platewise_core::history::PlanHistory;
use platewise_core::planner::assembler;
use platewise_core::{
    ApplicationError, DietaryPreference, InterfaceError, MealPlan, MealPlanner, UserPreferences,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    planner: Arc<MealPlanner>,
    history: Arc<Mutex<PlanHistory>>,
    recipe_source: Arc<dyn RecipeSource>,
}

impl ApiState {
    pub fn new(
        planner: Arc<MealPlanner>,
        history: Arc<Mutex<PlanHistory>>,
        recipe_source: Arc<dyn RecipeSource>,
    ) -> Self {
        Self { planner, history, recipe_source }
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub raw_ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub max_preparation_time: Option<u32>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    pub correlation_id: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: ApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/v1/meal-plans", post(generate_plan))
        .route("/api/v1/meal-plans/{date}", get(get_plan))
        .route("/api/v1/meal-plans/{date}/report", get(get_plan_report))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST];

    if allowed_origins.is_empty() {
        return CorsLayer::new().allow_origin(Any).allow_methods(methods).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(
                    event_name = "system.server.invalid_origin",
                    origin = %origin,
                    "skipping unparseable cors origin"
                );
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(origins).allow_methods(methods).allow_headers(Any)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn generate_plan(
    State(state): State<ApiState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    match generate(&state, request, &correlation_id).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn generate(
    state: &ApiState,
    request: GeneratePlanRequest,
    correlation_id: &str,
) -> Result<MealPlan, InterfaceError> {
    let available_ingredients = platewise_agent::perception::parse_ingredients(
        &request.raw_ingredients,
    )
    .map_err(|error| ApplicationError::from(error).into_interface(correlation_id))?;

    let preferences = UserPreferences {
        dietary_preference: request.dietary_preference,
        available_ingredients,
        excluded_ingredients: request.excluded_ingredients,
        max_preparation_time: request.max_preparation_time,
    };

    let candidates = state.recipe_source.candidate_recipes(&preferences).await.map_err(
        |error| ApplicationError::Integration(error.to_string()).into_interface(correlation_id),
    )?;

    if candidates.is_empty() {
        return Err(InterfaceError::NotFound {
            message: "no suitable recipes found for given preferences".to_string(),
            correlation_id: correlation_id.to_string(),
        });
    }

    let today = Utc::now().date_naive();

    // record() performs read-then-write eviction, so planning and recording
    // stay under one lock.
    let mut history = state.history.lock().await;
    let plan = state
        .planner
        .plan_day(today, &candidates, &preferences, &history)
        .map_err(|error| ApplicationError::from(error).into_interface(correlation_id))?;
    history.record(plan.clone(), today);

    info!(
        event_name = "api.meal_plan.generated",
        correlation_id = %correlation_id,
        date = %plan.date,
        shopping_entries = plan.shopping_list.len(),
        "meal plan generated and recorded"
    );

    Ok(plan)
}

async fn get_plan(State(state): State<ApiState>, Path(date): Path<NaiveDate>) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    match state.history.lock().await.get(date) {
        Some(plan) => (StatusCode::OK, Json(plan.clone())).into_response(),
        None => error_response(InterfaceError::NotFound {
            message: format!("no meal plan stored for {date}"),
            correlation_id,
        }),
    }
}

async fn get_plan_report(State(state): State<ApiState>, Path(date): Path<NaiveDate>) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    match state.history.lock().await.get(date) {
        Some(plan) => (StatusCode::OK, assembler::render(plan)).into_response(),
        None => error_response(InterfaceError::NotFound {
            message: format!("no meal plan stored for {date}"),
            correlation_id,
        }),
    }
}

fn error_response(error: InterfaceError) -> Response {
    let status = match &error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
        InterfaceError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!(
        event_name = "api.request.failed",
        correlation_id = %error.correlation_id(),
        status = %status,
        error = %error,
        "request failed"
    );

    let body = ApiError {
        error: error.user_message(),
        correlation_id: error.correlation_id().to_string(),
    };

    (status, Json(body)).into_response()
}
