//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: the canonical data source cannot be read
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    // The profile is seeded by migrations, so reading it exercises the
    // database end to end.
    match state.profile.get().await {
        Ok(_) => Ok(Json(HealthResponse {
            status: "healthy",
            database: "ok",
        })),
        Err(e) => {
            tracing::error!(error = ?e, "health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "error",
                }),
            ))
        }
    }
}
