//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code and build the `Location` header from the stored URL
/// 2. Count the visit
/// 3. Return 302 Found
///
/// The header is built before counting so a URL that cannot be sent as a
/// header value does not register a visit.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.link_service.get_record(&code).await?;

    let location = HeaderValue::from_bytes(record.original_url.as_bytes())
        .map_err(|e| AppError::internal("Failed to redirect to URL", e.to_string()))?;

    // A concurrent delete between lookup and visit surfaces as 404 here.
    state.link_service.visit(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
