//! Shape scanning (input pre-classification).
//!
//! This module inspects the trimmed cell text and produces a coarse
//! [`Shape`] mask. Rules declare the shape bits they need, and the dispatcher
//! skips a rule without running its regex when a bit is missing.
//!
//! The scan is a heuristic pre-filter. False positives are fine because the
//! rule's own pattern still has to match; false negatives are not, so a rule
//! must only require bits that every string its pattern accepts has.

bitflags::bitflags! {
    /// Coarse character-class buckets of a cell value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Shape: u8 {
        const HAS_DIGITS  = 1 << 0;
        const DIGITS_ONLY = 1 << 1;
        const HAS_SLASH   = 1 << 2;
        const HAS_DASH    = 1 << 3;
        const HAS_DOT     = 1 << 4;
        const HAS_COLON   = 1 << 5;
        const HAS_ALPHA   = 1 << 6;
        const HAS_SPACE   = 1 << 7;
    }
}

impl Shape {
    /// Scan `text` for its shape bits.
    pub fn scan(text: &str) -> Self {
        let mut shape = Shape::empty();
        let mut all_digits = !text.is_empty();

        for c in text.chars() {
            match c {
                '0'..='9' => shape |= Shape::HAS_DIGITS,
                '/' => shape |= Shape::HAS_SLASH,
                '-' => shape |= Shape::HAS_DASH,
                '.' => shape |= Shape::HAS_DOT,
                ':' => shape |= Shape::HAS_COLON,
                c if c.is_whitespace() => shape |= Shape::HAS_SPACE,
                c if c.is_alphabetic() => shape |= Shape::HAS_ALPHA,
                _ => {}
            }
            if !c.is_ascii_digit() {
                all_digits = false;
            }
        }

        if all_digits {
            shape |= Shape::DIGITS_ONLY;
        }
        shape
    }
}
