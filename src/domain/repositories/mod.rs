//! Repository trait definitions for data access.
//!
//! Traits are implemented in [`crate::infrastructure::persistence`]; unit tests
//! use the `mockall`-generated mocks.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
