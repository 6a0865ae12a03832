//! Repository trait for short URL data access.

use crate::domain::entities::{Registration, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Single source of truth for the URL ↔ short code mapping and visit counters.
///
/// Implementations keep both lookup directions consistent: a reader never
/// observes a code without its URL or a URL without its code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - volatile in-process registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the record already registered for `url`, or creates one with a
    /// freshly generated unique code.
    ///
    /// Atomic with respect to concurrent callers: two concurrent calls for the
    /// same unseen URL produce exactly one record.
    ///
    /// `url` must already be validated by the caller.
    async fn get_or_create(&self, url: &str) -> Result<Registration, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Increments the visit counter of `code` by one and returns the updated record.
    ///
    /// Returns `Ok(None)` if the code is not registered. Concurrent visits never
    /// lose increments.
    async fn record_visit(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every stored record ordered by creation time, then by code.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Removes a record from both lookup directions at once.
    ///
    /// Returns the removed record, or `Ok(None)` if the code is not registered.
    async fn delete(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
