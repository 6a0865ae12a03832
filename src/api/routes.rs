//! API route configuration.

use crate::api::handlers::{
    analytics_handler, delete_url_handler, list_urls_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`           - Create (or look up) a short URL
/// - `GET    /analytics/{code}`  - Visit analytics for a short URL
/// - `GET    /urls`              - List all short URLs
/// - `DELETE /urls/{code}`       - Remove a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{code}", delete(delete_url_handler))
}
