//! Spreadsheet serial rule (DIGITS_ONLY shape)

use crate::engine::Shape;
use crate::rules::date::helpers::*;
use crate::{DateParts, NormalizeError, Rule};

/// Pure digit string, read as a day count from 1899-12-30.
pub fn rule_spreadsheet_serial() -> Rule {
    rule! {
        name: "spreadsheet serial",
        pattern: re!(r"^[0-9]+$"),
        shape: Shape::DIGITS_ONLY,
        prod: |m, _range, _opts| {
            let invalid = || NormalizeError::InvalidSerial { serial: m.text.to_string() };
            // Too many digits for u64 is still outside the domain.
            let n: u64 = m.text.parse().map_err(|_| invalid())?;
            let date = serial_to_date(n).ok_or_else(invalid)?;
            Ok(DateParts::from_date(date))
        }
    }
}
