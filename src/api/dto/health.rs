//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::time::serialize_iso_millis;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub total_urls: usize,
}
