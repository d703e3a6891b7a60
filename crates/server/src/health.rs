use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use platewise_core::history::PlanHistory;
use serde::Serialize;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct HealthState {
    history: Arc<Mutex<PlanHistory>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub detail: String,
    pub stored_plans: usize,
    pub checked_at: String,
}

pub fn router(history: Arc<Mutex<PlanHistory>>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { history })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let stored_plans = state.history.lock().await.plan_count();

    let payload = HealthResponse {
        status: "ready",
        detail: "platewise-server runtime initialized".to_string(),
        stored_plans,
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}
