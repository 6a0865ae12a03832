//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - HTTP(S) URL validation
//! - [`short_url`] - Short URL reconstruction from config or request headers
//! - [`time`] - Timestamp formatting for API payloads

pub mod code_generator;
pub mod short_url;
pub mod time;
pub mod url_validator;
