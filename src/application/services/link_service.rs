//! Short link creation, resolution, and management service.

use std::sync::Arc;

use crate::domain::entities::{Registration, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, INVALID_URL, INVALID_URL_MESSAGE};
use crate::utils::short_url::build_short_url;
use crate::utils::url_validator::validate_url;

/// Service for creating and resolving shortened links.
///
/// Holds no state of its own; every call is a thin orchestration over the
/// [`UrlRepository`], which owns the URL ↔ code mapping.
pub struct LinkService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Shortens `long_url`, returning the existing record when it was shortened before.
    ///
    /// The URL is stored byte-for-byte as given; no normalization happens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    pub async fn shorten(&self, long_url: &str) -> Result<Registration, AppError> {
        if let Err(e) = validate_url(long_url) {
            tracing::debug!(url = %long_url, reason = %e, "Rejected URL");
            return Err(AppError::bad_request(INVALID_URL, INVALID_URL_MESSAGE));
        }

        let registration = self.url_repository.get_or_create(long_url).await?;

        if registration.is_new {
            tracing::info!(code = %registration.record.short_code, "Created short link");
        }

        Ok(registration)
    }

    /// Resolves a short code for redirect, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not registered.
    pub async fn visit(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.url_repository
            .record_visit(code)
            .await?
            .ok_or_else(AppError::short_url_not_found)
    }

    /// Retrieves a record without touching its visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not registered.
    pub async fn get_record(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(AppError::short_url_not_found)
    }

    /// Lists every stored record.
    pub async fn list_records(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list_all().await
    }

    /// Removes a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not registered.
    pub async fn delete(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .url_repository
            .delete(code)
            .await?
            .ok_or_else(AppError::short_url_not_found)?;

        tracing::info!(code = %code, "Deleted short link");

        Ok(record)
    }

    /// Counts stored records.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.url_repository.count().await
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        build_short_url(base_url, code)
    }
}
