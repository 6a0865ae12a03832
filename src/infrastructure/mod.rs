//! Infrastructure layer implementing the domain's storage contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation
pub mod persistence;
