//! Handler for requests no route matches.

use crate::error::AppError;

/// Answers unknown paths and unsupported methods with 404.
pub async fn fallback_handler() -> AppError {
    AppError::route_not_found()
}
