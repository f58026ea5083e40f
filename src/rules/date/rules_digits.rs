//! Numeric date layouts: ISO, and day/month/year with `/` or `-`

use crate::engine::Shape;
use crate::rules::date::helpers::*;
use crate::{DateParts, Matched, NormalizeError, Options, Rule, YearRange};

/// yyyy-mm-dd
pub fn rule_iso_date() -> Rule {
    rule! {
        name: "yyyy-mm-dd",
        pattern: re!(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$"),
        shape: Shape::HAS_DIGITS | Shape::HAS_DASH,
        prod: |m, _range, _opts| {
            let year = m.int(1).ok_or_else(|| m.unrecognized())? as i32;
            let month = m.int(2).ok_or_else(|| m.unrecognized())?;
            let day = m.int(3).ok_or_else(|| m.unrecognized())?;
            Ok(DateParts { year, month, day })
        }
    }
}

/// dd/mm/yyyy (day and month may be a single digit)
pub fn rule_slash_dmy() -> Rule {
    rule! {
        name: "dd/mm/yyyy",
        pattern: re!(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$"),
        shape: Shape::HAS_DIGITS | Shape::HAS_SLASH,
        prod: |m, range, opts| { day_month_year(m, range, opts, YearDigits::Four) }
    }
}

/// dd/mm/yy
pub fn rule_slash_dmy_short() -> Rule {
    rule! {
        name: "dd/mm/yy",
        pattern: re!(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$"),
        shape: Shape::HAS_DIGITS | Shape::HAS_SLASH,
        prod: |m, range, opts| { day_month_year(m, range, opts, YearDigits::Two) }
    }
}

/// dd-mm-yyyy
pub fn rule_dash_dmy() -> Rule {
    rule! {
        name: "dd-mm-yyyy",
        pattern: re!(r"^([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})$"),
        shape: Shape::HAS_DIGITS | Shape::HAS_DASH,
        prod: |m, range, opts| { day_month_year(m, range, opts, YearDigits::Four) }
    }
}

/// dd-mm-yy
pub fn rule_dash_dmy_short() -> Rule {
    rule! {
        name: "dd-mm-yy",
        pattern: re!(r"^([0-9]{1,2})-([0-9]{1,2})-([0-9]{2})$"),
        shape: Shape::HAS_DIGITS | Shape::HAS_DASH,
        prod: |m, range, opts| { day_month_year(m, range, opts, YearDigits::Two) }
    }
}

#[derive(Clone, Copy)]
enum YearDigits {
    Two,
    Four,
}

/// Shared production for the day/month/year layouts: groups 1..=3 are
/// day, month and year.
fn day_month_year(
    m: &Matched<'_>,
    range: &YearRange,
    opts: &Options,
    digits: YearDigits,
) -> Result<DateParts, NormalizeError> {
    let day = m.int(1).ok_or_else(|| m.unrecognized())?;
    let month = m.int(2).ok_or_else(|| m.unrecognized())?;
    let raw_year = m.int(3).ok_or_else(|| m.unrecognized())?;

    let year = match digits {
        YearDigits::Four => raw_year as i32,
        YearDigits::Two => expand_two_digit_year(raw_year, range, opts.century),
    };

    Ok(DateParts { year, month, day })
}
