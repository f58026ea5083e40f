pub mod helpers;
pub mod rules;
pub mod rules_digits;
pub mod rules_fallback;
pub mod rules_serial;
