//! Spreadsheet day serials.
//!
//! Serial 1 is 1900-01-01 in the spreadsheet's own calendar, which wrongly
//! counts 1900 as a leap year. Counting from 1899-12-30 instead keeps every
//! serial from 61 (1900-03-01) onwards on the right day.

use crate::api::MAX_SERIAL;
use chrono::{Days, NaiveDate};

/// Date for serial `n`, or `None` outside `1..=MAX_SERIAL`.
pub fn serial_to_date(n: u64) -> Option<NaiveDate> {
    if !(1..=MAX_SERIAL).contains(&n) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_serials() {
        assert_eq!(serial_to_date(1), Some(ymd(1899, 12, 31)));
        assert_eq!(serial_to_date(2), Some(ymd(1900, 1, 1)));
        assert_eq!(serial_to_date(61), Some(ymd(1900, 3, 1)));
        assert_eq!(serial_to_date(25569), Some(ymd(1970, 1, 1)));
        assert_eq!(serial_to_date(44562), Some(ymd(2022, 1, 1)));
        assert_eq!(serial_to_date(45000), Some(ymd(2023, 3, 15)));
        assert_eq!(serial_to_date(MAX_SERIAL), Some(ymd(9999, 12, 31)));
    }

    #[test]
    fn outside_domain() {
        assert_eq!(serial_to_date(0), None);
        assert_eq!(serial_to_date(MAX_SERIAL + 1), None);
    }
}
