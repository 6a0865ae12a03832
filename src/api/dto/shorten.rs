//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::time::serialize_iso_millis;
use crate::utils::url_validator::validate_http_url;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so a missing field reaches validation
/// and yields the "URL is required" error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_shorten_request"))]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}

/// Checks the scheme and syntax of a present, non-empty `url`.
fn validate_shorten_request(request: &ShortenRequest) -> Result<(), ValidationError> {
    match request.url.as_deref() {
        Some(url) if !url.is_empty() => validate_http_url(url),
        _ => Ok(()),
    }
}

/// Response for a shortened (or already known) URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub visit_count: u64,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub created_at: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn request(url: Option<&str>) -> ShortenRequest {
        ShortenRequest {
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(Some("https://example.com")).validate().is_ok());
    }

    #[test]
    fn test_missing_url_fails_on_field() {
        let errors = request(None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_empty_url_fails_on_field() {
        let errors = request(Some("")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_errors_map_to_client_tags() {
        let missing: AppError = request(None).validate().unwrap_err().into();
        assert_eq!(missing.to_body().error, "URL is required");

        let empty: AppError = request(Some("")).validate().unwrap_err().into();
        assert_eq!(empty.to_body().error, "URL is required");

        let invalid: AppError = request(Some("not-a-url")).validate().unwrap_err().into();
        assert_eq!(invalid.to_body().error, "Invalid URL");
    }

    #[test]
    fn test_unsupported_scheme_fails_schema_check() {
        let errors = request(Some("ftp://example.com")).validate().unwrap_err();
        assert!(!errors.field_errors().contains_key("url"));
    }
}
