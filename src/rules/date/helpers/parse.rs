//! Generic date parsing for values no structural pattern claimed.

use super::months::{month_from_name, strip_weekday};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d.%m.%Y"];

/// Parse `text` with a fixed list of locale-independent layouts.
///
/// Only the calendar date is kept; a time or offset part is dropped as
/// written (no timezone conversion).
pub fn parse_generic(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = DATETIME_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok()) {
        return Some(dt.date());
    }
    if let Some(date) = DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok()) {
        return Some(date);
    }
    parse_month_name(text)
}

/// "15 mars 2025", "1er septembre 2025", "March 15, 2025", each with an
/// optional leading weekday.
fn parse_month_name(text: &str) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    let rest = strip_weekday(lower.trim());

    let day_first = regex!(r"^([0-9]{1,2})(?:er|st|nd|rd|th)?\s+(\p{L}+\.?),?\s+([0-9]{4})$");
    let month_first = regex!(r"^(\p{L}+\.?)\s+([0-9]{1,2})(?:st|nd|rd|th)?,?\s+([0-9]{4})$");

    let (day, month, year) = if let Some(caps) = day_first.captures(rest) {
        (caps.get(1)?.as_str(), caps.get(2)?.as_str(), caps.get(3)?.as_str())
    } else {
        let caps = month_first.captures(rest)?;
        (caps.get(2)?.as_str(), caps.get(1)?.as_str(), caps.get(3)?.as_str())
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month_from_name(month)?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn timestamps_keep_written_date() {
        assert_eq!(parse_generic("2025-03-15T23:30:00-05:00"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("Sat, 15 Mar 2025 10:00:00 +0000"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("2025-03-15T08:30:00"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("2025-03-15 08:30"), ymd(2025, 3, 15));
    }

    #[test]
    fn numeric_layouts() {
        assert_eq!(parse_generic("2025/03/15"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("2025.03.15"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("15.03.2025"), ymd(2025, 3, 15));
    }

    #[test]
    fn month_names() {
        assert_eq!(parse_generic("15 mars 2025"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("Lundi 1er septembre 2025"), ymd(2025, 9, 1));
        assert_eq!(parse_generic("March 15, 2025"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("Saturday, March 15th, 2025"), ymd(2025, 3, 15));
        assert_eq!(parse_generic("15 Mar. 2025"), ymd(2025, 3, 15));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_generic("not a date"), None);
        assert_eq!(parse_generic("31 février 2025"), None);
        assert_eq!(parse_generic("2025/02/30"), None);
    }
}
