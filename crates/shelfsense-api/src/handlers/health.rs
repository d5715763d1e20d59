//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

/// Health check endpoint (liveness probe).
///
/// Reports the configured detection model so operators can confirm which
/// model version the deployment is pointed at.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.roboflow.model_id().to_string(),
    })
}
