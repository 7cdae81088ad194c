use chrono::{DateTime, Local, NaiveDateTime};

/// Display format for `lastUpdated`: `DD/MM/YYYY HH:mm`.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format a backend timestamp for display.
///
/// Accepts RFC 3339 (`2025-03-14T09:30:00Z`), shown in the viewer's local
/// time zone, and zone-less ISO local date-times (`2025-03-14T09:30:00.123456`),
/// shown as written. Anything else is shown verbatim.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return value
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return value.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(raw: &str) -> String {
        DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    #[test]
    fn test_rfc3339_is_shown_in_local_time() {
        assert_eq!(format_timestamp("2025-03-14T09:30:00Z"), local("2025-03-14T09:30:00Z"));
        assert_eq!(
            format_timestamp("2025-03-14T09:30:00+07:00"),
            local("2025-03-14T09:30:00+07:00")
        );
    }

    #[test]
    fn test_same_instant_formats_the_same() {
        assert_eq!(
            format_timestamp("2025-03-14T02:30:00Z"),
            format_timestamp("2025-03-14T09:30:00+07:00")
        );
    }

    #[test]
    fn test_local_datetime() {
        assert_eq!(format_timestamp("2024-12-01T18:05:59.123456"), "01/12/2024 18:05");
        assert_eq!(format_timestamp("2024-12-01T18:05:59"), "01/12/2024 18:05");
    }

    #[test]
    fn test_unparseable_is_verbatim() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
