use super::{rules_digits, rules_fallback, rules_serial};
use crate::Rule;

/// The default rule list, in priority order. Order is behavior: the first
/// structural match decides the outcome.
pub fn get() -> Vec<Rule> {
    vec![
        rules_serial::rule_spreadsheet_serial(),
        rules_digits::rule_iso_date(),
        rules_digits::rule_slash_dmy(),
        rules_digits::rule_slash_dmy_short(),
        rules_digits::rule_dash_dmy(),
        rules_digits::rule_dash_dmy_short(),
        rules_fallback::rule_generic_date(),
    ]
}
