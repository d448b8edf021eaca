//! Health monitoring controller

use axum::{extract::State, response::Json};

use crate::presentation::controllers::AppState;
use crate::presentation::models::HealthResponse;

/// GET /health - Service health and liveness information
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.startup_time.elapsed().as_secs(),
        active_sessions: state.carts.active_sessions(),
        timestamp: chrono::Utc::now(),
    })
}
