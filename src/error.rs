//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced to a client is one of three kinds:
//!
//! | Variant                  | Status | Meaning                              |
//! |--------------------------|--------|--------------------------------------|
//! | [`AppError::Validation`] | 400    | Missing or malformed client input    |
//! | [`AppError::NotFound`]   | 404    | Short code or route does not exist   |
//! | [`AppError::Internal`]   | 500    | Unexpected failure, details withheld |
//!
//! The response body is always `{"error": <tag>, "message": <text>}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

pub const URL_REQUIRED: &str = "URL is required";
pub const URL_REQUIRED_MESSAGE: &str = "Please provide a valid URL to shorten";
pub const INVALID_URL: &str = "Invalid URL";
pub const INVALID_URL_MESSAGE: &str = "Please provide a valid HTTP or HTTPS URL";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{error}: {message}")]
    Validation { error: String, message: String },

    #[error("{error}: {message}")]
    NotFound { error: String, message: String },

    /// `detail` is written to the log and never sent to the client.
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn not_found(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Unknown short code.
    pub fn short_url_not_found() -> Self {
        Self::not_found(
            "Short URL not found",
            "The requested short URL does not exist",
        )
    }

    /// No route matched the request.
    pub fn route_not_found() -> Self {
        Self::not_found("Route not found", "The requested endpoint does not exist")
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Returns the HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing body.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            AppError::Validation { error, message } | AppError::NotFound { error, message } => {
                ErrorBody {
                    error: error.clone(),
                    message: message.clone(),
                }
            }
            AppError::Internal { message, .. } => ErrorBody {
                error: "Internal server error".to_string(),
                message: message.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, detail } = &self {
            tracing::error!(detail = %detail, "{}", message);
        }

        (self.status_code(), Json(self.to_body())).into_response()
    }
}

/// Maps field validation failures on the shorten request.
///
/// A missing or empty `url` reports "URL is required"; anything else that
/// failed is reported as an invalid URL.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .get("url")
            .is_some_and(|errs| {
                errs.iter()
                    .any(|e| e.code == "required" || e.code == "length")
            });

        if missing {
            AppError::bad_request(URL_REQUIRED, URL_REQUIRED_MESSAGE)
        } else {
            AppError::bad_request(INVALID_URL, INVALID_URL_MESSAGE)
        }
    }
}

/// A body that is not JSON, or whose `url` is not a string, carries no usable URL.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::bad_request(URL_REQUIRED, URL_REQUIRED_MESSAGE)
    }
}
