//! Failure containment at the HTTP boundary.
//!
//! Panics inside handlers become a generic 500 and slow requests are cut off
//! after the configured timeout. Neither leaks internals to the client.

use std::any::Any;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Converts a caught panic into the standard 500 body.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicResponder;

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> axum::http::Response<Self::ResponseBody> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };

        panic_response(detail)
    }
}

fn panic_response(detail: String) -> Response {
    AppError::internal("Something went wrong", format!("handler panicked: {detail}")).into_response()
}

/// Catches handler panics.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder)
}

/// Fails requests that run longer than `timeout_secs` with 408.
pub fn timeout_layer(timeout_secs: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(timeout_secs),
    )
}
