//! Timestamp formatting
//!
//! Every output line starts with a bracketed ISO 8601 timestamp with
//! millisecond precision: `2025-01-08T10:30:45.123Z`.

use chrono::{DateTime, Utc};

/// Format a `DateTime<Utc>` as ISO 8601 with milliseconds.
#[must_use]
pub fn iso8601(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Format the current instant as ISO 8601 with milliseconds.
#[must_use]
pub fn now_iso8601() -> String {
    iso8601(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = iso8601(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_now_is_iso8601_shaped() {
        let result = now_iso8601();
        assert!(result.ends_with('Z'));
        assert!(result.contains('T'));
        assert_eq!(result.len(), "2025-01-08T10:30:45.123Z".len());
    }
}
