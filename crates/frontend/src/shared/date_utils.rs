//! Utilities for date and time formatting
//!
//! Keeps timestamp rendering consistent across the details views.

/// Placeholder rendered when a timestamp is absent.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Format an optional ISO-8601 timestamp to DD.MM.YYYY HH:MM:SS.
/// Example: Some("2023-10-01T12:00:00Z") -> "01.10.2023 12:00:00"
///
/// Absent or blank input renders the "Not specified" placeholder. Input the
/// parser does not understand is passed through unchanged so a rendering
/// caller is never interrupted.
pub fn format_datetime(value: Option<&str>) -> String {
    let raw = match value {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return NOT_SPECIFIED.to_string(),
    };

    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(Some("2023-10-01T12:00:00Z")),
            "01.10.2023 12:00:00"
        );
        assert_eq!(
            format_datetime(Some("2023-10-05T14:30:00Z")),
            "05.10.2023 14:30:00"
        );
        // offset is kept, not converted
        assert_eq!(
            format_datetime(Some("2024-12-31T23:59:59+03:00")),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_missing_value_renders_placeholder() {
        assert_eq!(format_datetime(None), "Not specified");
        assert_eq!(format_datetime(Some("")), "Not specified");
        assert_eq!(format_datetime(Some("   ")), "Not specified");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime(Some("invalid")), "invalid");
        assert_eq!(format_datetime(Some("2023-10-01")), "2023-10-01");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let first = format_datetime(Some("2023-10-01T12:00:00Z"));
        let second = format_datetime(Some("2023-10-01T12:00:00Z"));
        assert_eq!(first, second);
    }
}
