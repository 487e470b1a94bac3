//! Date display helpers shared by the preview and the exporter.

use chrono::NaiveDate;

pub const PRESENT: &str = "Present";

/// Formats a stored date string as `"Mar 2024"`.
///
/// The empty string is the "unset" sentinel and formats as empty. Accepts
/// `YYYY-MM-DD` and the `YYYY-MM` shape produced by month pickers; anything
/// else is shown verbatim rather than as a placeholder.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    parse_date(trimmed)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            // Full timestamps such as "2024-03-15T00:00:00Z"
            s.get(..10)
                .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        })
}

/// `"<start> - <end>"`, with `Present` standing in for the end of an
/// ongoing position whatever end date is stored.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        PRESENT.to_string()
    } else {
        format_date(end)
    };
    format!("{} - {}", format_date(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 2024");
        assert_eq!(format_date("2022-01-01"), "Jan 2022");
        assert_eq!(format_date("1999-12-31"), "Dec 1999");
    }

    #[test]
    fn test_month_only() {
        assert_eq!(format_date("2023-09"), "Sep 2023");
    }

    #[test]
    fn test_timestamp_prefix() {
        assert_eq!(format_date("2021-06-30T12:00:00Z"), "Jun 2021");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_date("Summer 2020"), "Summer 2020");
        assert_ne!(format_date("not a date"), "Invalid Date");
    }

    #[test]
    fn test_current_range_ends_with_present() {
        assert_eq!(date_range("2022-01-01", "", true), "Jan 2022 - Present");
        assert_eq!(
            date_range("2022-01-01", "2023-05-01", true),
            "Jan 2022 - Present"
        );
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(
            date_range("2019-09-01", "2023-06-01", false),
            "Sep 2019 - Jun 2023"
        );
    }

    #[test]
    fn test_range_with_unset_dates() {
        assert_eq!(date_range("", "", false), " - ");
    }
}
