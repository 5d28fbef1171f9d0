//! Timestamp parsing for trip datasets.
//!
//! The published city files carry `Start Time` as `2017-01-01 00:07:57`;
//! an ISO 8601 `T` separator (with optional fractional seconds) is
//! accepted as a fallback.

use chrono::NaiveDateTime;

/// Parses a trip timestamp string.
#[must_use]
pub fn parse_trip_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_timestamp() {
        let dt = parse_trip_timestamp("2017-01-01 00:07:57").unwrap();
        assert_eq!(dt.to_string(), "2017-01-01 00:07:57");
    }

    #[test]
    fn parses_iso_timestamp_with_fractional() {
        let dt = parse_trip_timestamp("2017-06-15T14:30:00.000").unwrap();
        assert_eq!(dt.to_string(), "2017-06-15 14:30:00");
    }

    #[test]
    fn rejects_invalid_timestamp() {
        assert!(parse_trip_timestamp("not-a-date").is_none());
        assert!(parse_trip_timestamp("2017-13-01 00:00:00").is_none());
    }
}
