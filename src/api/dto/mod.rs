//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names;
//! request bodies are checked with `validator`.

pub mod analytics;
pub mod health;
pub mod shorten;
pub mod urls;
