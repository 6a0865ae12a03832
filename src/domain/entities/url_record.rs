//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between an original URL and its short code.
///
/// Created once per distinct `original_url`. Only the redirect path mutates
/// `visit_count`, and it never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub visit_count: u64,
}

impl UrlRecord {
    /// Creates a fresh record with a zero visit counter.
    pub fn new(original_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_code,
            created_at,
            visit_count: 0,
        }
    }
}

/// Result of a get-or-create call.
///
/// `is_new` is `false` when the URL was already registered and the existing
/// record was returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub record: UrlRecord,
    pub is_new: bool,
}
