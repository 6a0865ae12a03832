//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::{AppError, URL_REQUIRED, URL_REQUIRED_MESSAGE};
use crate::state::AppState;
use crate::utils::short_url::resolve_base_url;

/// Creates a short URL, or returns the existing one for a known URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` for a new link, `200 OK` if the URL was shortened before:
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "http://localhost:3000/abc12345",
///   "originalUrl": "https://example.com",
///   "shortCode": "abc12345",
///   "visitCount": 0,
///   "createdAt": "2024-05-01T12:00:00.000Z",
///   "message": "URL shortened successfully"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or not an HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request(URL_REQUIRED, URL_REQUIRED_MESSAGE))?;

    let registration = state.link_service.shorten(&url).await?;
    let record = registration.record;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    let short_url = state
        .link_service
        .get_short_url(&base_url, &record.short_code);

    let (status, message) = if registration.is_new {
        (StatusCode::CREATED, "URL shortened successfully")
    } else {
        (StatusCode::OK, "URL already shortened")
    };

    Ok((
        status,
        Json(ShortenResponse {
            success: true,
            short_url,
            original_url: record.original_url,
            short_code: record.short_code,
            visit_count: record.visit_count,
            created_at: record.created_at,
            message: message.to_string(),
        }),
    ))
}
