//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL mapping with its visit counter
//! - [`Registration`] - Outcome of registering a URL (record plus "newly created" flag)

pub mod url_record;

pub use url_record::{Registration, UrlRecord};
