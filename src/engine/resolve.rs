//! Validation of extracted calendar parts.
//!
//! A production only says "this text looks like day 31, month 2, year 2025".
//! Resolution decides whether that is a real calendar date, then whether its
//! year is plausible. The calendar check runs first so that
//! `ImplausibleYear` always refers to an actual date.

use crate::{CanonicalDate, DateParts, NormalizeError, YearRange};
use chrono::NaiveDate;

pub(crate) fn resolve(parts: DateParts, text: &str, range: &YearRange) -> Result<CanonicalDate, NormalizeError> {
    let date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
        .ok_or_else(|| NormalizeError::UnrecognizedFormat { input: text.to_string() })?;

    if !range.contains(parts.year) {
        return Err(NormalizeError::ImplausibleYear { year: parts.year, range: *range });
    }

    Ok(CanonicalDate::from_date(date))
}
