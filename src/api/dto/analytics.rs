//! DTOs for per-link analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::time::serialize_iso_millis;

/// Analytics for a single short link.
///
/// `last_accessed` is the time of this analytics call, not a stored visit time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub success: bool,
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub visit_count: u64,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub last_accessed: DateTime<Utc>,
}
