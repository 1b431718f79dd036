use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO-8601 date or date-time into seconds since the Unix epoch.
///
/// Accepts full RFC 3339 timestamps, zone-less date-times (taken as UTC) and
/// plain dates (midnight UTC). Dates before the epoch are rejected.
pub fn parse_iso8601(value: &str) -> Option<u64> {
    let value = value.trim();
    let secs = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        dt.timestamp()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        dt.and_utc().timestamp()
    } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)?.and_utc().timestamp()
    } else {
        return None;
    };
    u64::try_from(secs).ok()
}

/// Format epoch seconds as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_iso8601(timestamp: u64) -> Option<String> {
    let secs = i64::try_from(timestamp).ok()?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_iso8601("2020-01-01T00:00:00Z"), Some(1_577_836_800));
        assert_eq!(parse_iso8601("2020-01-01T01:00:00+01:00"), Some(1_577_836_800));
    }

    #[test]
    fn test_parse_without_zone_and_date_only() {
        assert_eq!(parse_iso8601("2020-01-01T00:00:00"), Some(1_577_836_800));
        assert_eq!(parse_iso8601(" 2020-01-01 "), Some(1_577_836_800));
    }

    #[test]
    fn test_parse_rejects_garbage_and_pre_epoch() {
        assert_eq!(parse_iso8601("yesterday"), None);
        assert_eq!(parse_iso8601("2020-13-01"), None);
        assert_eq!(parse_iso8601("1960-01-01"), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format_iso8601(1_577_836_800).as_deref(),
            Some("2020-01-01T00:00:00Z")
        );
        assert_eq!(format_iso8601(0).as_deref(), Some("1970-01-01T00:00:00Z"));
    }
}
