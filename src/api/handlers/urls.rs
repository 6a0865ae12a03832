//! Handlers for link listing and removal.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::urls::{DeleteResponse, UrlItem, UrlListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::resolve_base_url;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// Items are ordered by creation time.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UrlListResponse>, AppError> {
    let records = state.link_service.list_records().await?;
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);

    let urls: Vec<UrlItem> = records
        .into_iter()
        .map(|record| UrlItem::from_record(record, &base_url))
        .collect();

    Ok(Json(UrlListResponse {
        success: true,
        total_urls: urls.len(),
        urls,
    }))
}

/// Removes a short link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// The original URL is forgotten as well, so shortening it again yields a
/// new code.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let record = state.link_service.delete(&code).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Short URL deleted successfully".to_string(),
        deleted_url: record.original_url,
    }))
}
