//! HTTP middleware for request processing.
//!
//! Provides observability and failure containment.

pub mod recovery;
pub mod tracing;
