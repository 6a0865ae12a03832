//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /health`  - Health check
//! - `/api/*`        - REST API
//! - anything else   - 404 `Route not found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Request-level deadline
//! - **Panic recovery** - Generic 500 instead of a dropped connection
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, redirect_handler};
use crate::api::middleware::{recovery, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout_secs` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout_secs: u64) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout_secs))
}

/// Routes and middleware without path normalization.
pub fn build_router(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(fallback_handler)
        .with_state(state)
        .layer(recovery::catch_panic_layer())
        .layer(recovery::timeout_layer(request_timeout_secs))
        .layer(tracing::layer())
}
