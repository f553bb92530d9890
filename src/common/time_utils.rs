use chrono::NaiveDateTime;

/// Timestamp format used in metadata, exports, and the local store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get current timestamp as formatted string
pub fn current_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a metadata timestamp; None if the string is not in the expected format.
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()
}

/// Convert timestamp to date-only string for export filenames
pub fn timestamp_to_date(timestamp: &str) -> String {
    if let Some(dt) = parse_timestamp(timestamp) {
        dt.format("%Y-%m-%d").to_string()
    } else {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_valid() {
        let dt = parse_timestamp("2025-07-01 10:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2025-07-01");
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("not a timestamp").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025-07-01").is_none());
    }

    #[test]
    fn test_timestamp_to_date() {
        assert_eq!(timestamp_to_date("2025-07-01 10:30:00"), "2025-07-01");
    }

    #[test]
    fn test_current_timestamp_round_trips() {
        let now = current_timestamp();
        assert!(parse_timestamp(&now).is_some());
    }
}
