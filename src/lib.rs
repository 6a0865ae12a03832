//! # Shortlink
//!
//! An in-memory URL shortening service with visit analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository contract
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory URL registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 8-character URL-safe short codes, rechecked for collisions
//! - Deduplication: the same URL always maps to the same code
//! - Atomic visit counting on redirect
//!
//! ## Storage
//!
//! All records live in process memory and are lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Registration, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
