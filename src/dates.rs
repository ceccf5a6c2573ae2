//! Display labels for report identifiers.
//!
//! Identifiers are usually `YYYY-MM-DD` dates. The calendar date is used as
//! written, without any timezone conversion, and anything unparseable is shown
//! verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const SHORT_FORMAT: &str = "%b %-d, %Y";
const LONG_FORMAT: &str = "%A, %B %-d, %Y";

pub fn parse_report_date(identifier: &str) -> Option<NaiveDate> {
    let trimmed = identifier.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Sidebar label, e.g. "Jun 1, 2024".
pub fn list_label(identifier: &str) -> String {
    match parse_report_date(identifier) {
        Some(date) => date.format(SHORT_FORMAT).to_string(),
        None => identifier.to_string(),
    }
}

/// Header date, e.g. "Saturday, June 1, 2024".
pub fn title_label(identifier: &str) -> String {
    match parse_report_date(identifier) {
        Some(date) => date.format(LONG_FORMAT).to_string(),
        None => identifier.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_label() {
        assert_eq!(list_label("2024-06-01"), "Jun 1, 2024");
        assert_eq!(list_label("2024-05-30"), "May 30, 2024");
        assert_eq!(list_label("2023-12-25T08:00:00Z"), "Dec 25, 2023");
    }

    #[test]
    fn test_title_label() {
        assert_eq!(title_label("2024-06-01"), "Saturday, June 1, 2024");
        assert_eq!(title_label("2024-01-01T23:30:00"), "Monday, January 1, 2024");
    }

    #[test]
    fn test_unparseable_identifier_is_verbatim() {
        assert_eq!(list_label("weekly-roundup"), "weekly-roundup");
        assert_eq!(title_label("2024-13-40"), "2024-13-40");
        assert_eq!(list_label(""), "");
    }
}
