//! Catch-all rule for values no numeric layout claimed

use crate::rules::date::helpers::parse_generic;
use crate::{DateParts, Rule};

/// Generic parse of anything left over. Always matches structurally, so a
/// failed parse is the final verdict (`UnrecognizedFormat`).
pub fn rule_generic_date() -> Rule {
    rule! {
        name: "generic date",
        pattern: pred!(|_| true),
        prod: |m, _range, _opts| {
            let date = parse_generic(m.text).ok_or_else(|| m.unrecognized())?;
            Ok(DateParts::from_date(date))
        }
    }
}
