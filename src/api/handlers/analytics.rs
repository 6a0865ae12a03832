//! Handler for per-link analytics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use chrono::Utc;

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::resolve_base_url;

/// Returns visit analytics for a short link without counting a visit.
///
/// # Endpoint
///
/// `GET /api/analytics/{code}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortCode": "abc12345",
///   "originalUrl": "https://example.com",
///   "shortUrl": "http://localhost:3000/abc12345",
///   "visitCount": 1,
///   "createdAt": "2024-05-01T12:00:00.000Z",
///   "lastAccessed": "2024-05-01T12:05:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let record = state.link_service.get_record(&code).await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    let short_url = state
        .link_service
        .get_short_url(&base_url, &record.short_code);

    Ok(Json(AnalyticsResponse {
        success: true,
        short_code: record.short_code,
        original_url: record.original_url,
        short_url,
        visit_count: record.visit_count,
        created_at: record.created_at,
        last_accessed: Utc::now(),
    }))
}
