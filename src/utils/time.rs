//! Timestamp formatting for API payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as RFC 3339 UTC with millisecond precision,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub fn to_iso_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for [`to_iso_millis`].
pub fn serialize_iso_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso_millis(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_millisecond_precision_with_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(to_iso_millis(&ts), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_truncates_sub_millisecond_digits() {
        let ts = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        assert_eq!(to_iso_millis(&ts), "2023-11-14T22:13:20.123Z");
    }
}
