use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use tracing::warn;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Roster catalog server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().to_rfc3339();
    match state.catalog().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": timestamp,
                "database": "ok",
            })),
        ),
        Err(err) => {
            warn!(error = %err, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "timestamp": timestamp,
                    "database": "unreachable",
                })),
            )
        }
    }
}

pub async fn not_found_handler() -> AppResult<()> {
    Err(AppError::not_found("Not found"))
}
