use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod batch;
mod engine;
mod error;
mod rules;

pub use api::{
    CanonicalDate, CellValue, CenturyRule, NormalizeDetails, NormalizeResultVerbose, Options, YearRange,
    normalize, normalize_verbose_with, normalize_with,
};
pub use batch::{LABEL_INVALID, LABEL_MISSING, ColumnReport, ColumnSummary, RowOutcome, RowProblem, normalize_column};
pub use engine::Shape;
pub use error::{ConfigError, FailureKind, NormalizeError};

// --- Internal types ---------------------------------------------------------

/// Calendar components extracted by a rule production.
///
/// These are not validated yet: `resolve` checks that they form a real
/// calendar date and that the year is plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        DateParts { year: date.year(), month: date.month(), day: date.day() }
    }
}

// Pattern items used by rules: either a Regex matched against the trimmed
// input, or a Predicate over the same text.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Match a regular expression against the whole (trimmed) input. The
    /// `Regex` is stored as a static reference (created via the `regex!`
    /// helper macro in `src/macros.rs`).
    Regex(&'static Regex),

    /// Structural check that is not expressible as a single regex.
    Predicate(fn(&str) -> bool),
}

/// A structural match: the trimmed input plus the capture groups of the rule's
/// regex (`groups[0]` is the whole match; non-participating groups are empty).
#[derive(Debug, Clone)]
pub(crate) struct Matched<'t> {
    pub text: &'t str,
    pub groups: Vec<&'t str>,
}

impl<'t> Matched<'t> {
    /// Parse capture group `idx` as an unsigned integer.
    pub fn int(&self, idx: usize) -> Option<u32> {
        self.groups.get(idx)?.parse().ok()
    }

    /// The failure reported when a structurally matched value cannot be read.
    pub fn unrecognized(&self) -> NormalizeError {
        NormalizeError::UnrecognizedFormat { input: self.text.to_string() }
    }
}

pub(crate) type Production =
    Box<dyn Fn(&Matched<'_>, &YearRange, &Options) -> Result<DateParts, NormalizeError> + Send + Sync>;

/// A normalization rule: a name, a structural `pattern`, the coarse input
/// `shape` it requires, and a `production` that turns a match into calendar
/// parts or a failure.
///
/// Rules are evaluated in list order and the first structural match wins.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Pattern,
    /// Shape bits that must all be present in the input for this rule to be tried.
    pub shape: Shape,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .field("shape", &self.shape)
            .finish()
    }
}
