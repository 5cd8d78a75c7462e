//! Event date parsing.

use chrono::{DateTime, Utc};

/// Attempts to parse an RDAP event date.
///
/// RFC 3339 is the norm, but some registries emit space-separated or
/// date-only forms, so a small set of fallbacks is accepted.
pub(crate) fn parse_event_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d"];
    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_date_rfc3339() {
        let dt = parse_event_date("2024-01-15T10:30:45Z").expect("parses");
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 10:30:45");
    }

    #[test]
    fn test_parse_event_date_rfc3339_with_offset() {
        let dt = parse_event_date("2024-01-15T10:30:45+02:00").expect("parses");
        // Normalized to UTC
        assert_eq!(dt.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_parse_event_date_space_separated() {
        assert!(parse_event_date("2024-01-15 10:30:45").is_some());
    }

    #[test]
    fn test_parse_event_date_date_only() {
        let dt = parse_event_date("2024-01-15").expect("parses");
        assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_parse_event_date_invalid() {
        assert!(parse_event_date("not a date").is_none());
        assert!(parse_event_date("").is_none());
    }
}
