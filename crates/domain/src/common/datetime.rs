//! DateTime parsing utilities with consistent error handling.

use chrono::{DateTime, Utc};

/// Parses an RFC3339 timestamp string into UTC.
///
/// # Examples
///
/// ```
/// use tripmate_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2025-03-10T08:00:00Z").unwrap();
/// assert_eq!(dt.month(), 3);
/// ```
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses an RFC3339 timestamp string, falling back to `default` on error.
///
/// Stored timestamps are written by this application but may have been
/// edited by hand in browser devtools, so reads never fail on them.
pub fn parse_datetime_or(s: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    parse_datetime(s).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn offset_timestamps_are_converted_to_utc() {
        let dt = parse_datetime("2025-03-10T08:30:00-03:00").unwrap();
        assert_eq!(dt.hour(), 11);
        assert_eq!(dt.day(), 10);
    }

    #[test]
    fn date_without_time_is_rejected() {
        assert!(parse_datetime("2025-03-10").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let default = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_datetime_or("ontem", default), default);
    }
}
