//! DTOs for link listing and removal.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;
use crate::utils::short_url::build_short_url;
use crate::utils::time::serialize_iso_millis;

/// Full dump of stored links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListResponse {
    pub success: bool,
    pub total_urls: usize,
    pub urls: Vec<UrlItem>,
}

/// One stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItem {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub visit_count: u64,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl UrlItem {
    pub fn from_record(record: UrlRecord, base_url: &str) -> Self {
        Self {
            short_url: build_short_url(base_url, &record.short_code),
            short_code: record.short_code,
            original_url: record.original_url,
            visit_count: record.visit_count,
            created_at: record.created_at,
        }
    }
}

/// Confirmation of a removed link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted_url: String,
}
