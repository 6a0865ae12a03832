//! URL validation.
//!
//! Accepts only well-formed absolute `http`/`https` URLs. Input is never
//! rewritten: two spellings of the same resource (`https://a.com` and
//! `https://A.com/`) are distinct URLs as far as the registry is concerned.

use std::borrow::Cow;

use url::Url;
use validator::ValidationError;

/// Reasons a URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Checks that `input` is an absolute `http` or `https` URL.
///
/// Rejects other schemes such as `ftp:`, `javascript:`, `data:` or `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string,
/// [`UrlValidationError::ControlCharacters`] for input with ASCII control
/// characters, [`UrlValidationError::InvalidFormat`] for malformed URLs and
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The parser silently drops tabs and newlines, but the stored string must
    // stay usable as a `Location` header value.
    if input.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

/// Returns `true` if `input` passes [`validate_url`].
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}

/// `validator` adapter for request DTOs.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    validate_url(input).map_err(|e| {
        let mut err = ValidationError::new("http_url");
        err.message = Some(Cow::Owned(e.to_string()));
        err
    })
}
