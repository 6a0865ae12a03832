//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service liveness and the number of stored links.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2024-05-01T12:00:00.000Z",
///   "totalUrls": 3
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let total_urls = state.link_service.count().await?;

    Ok(Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        total_urls,
    }))
}
