//! Error types for date normalization and its configuration.

use crate::api::YearRange;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a cell value could not be normalized.
///
/// These are reported, never raised: the import keeps going and the caller
/// turns them into per-row problems.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeError {
    /// Value missing or blank.
    #[error("date value is empty")]
    EmptyInput,

    /// Numeric value outside the spreadsheet serial domain.
    #[error("spreadsheet serial {serial} is outside 1..=2958465")]
    InvalidSerial { serial: String },

    /// Real calendar date whose year falls outside the configured range.
    #[error("year {year} is outside the plausible range {range}")]
    ImplausibleYear { year: i32, range: YearRange },

    /// No pattern matched, or the matched text is not a calendar date.
    #[error("unrecognized date format: {input:?}")]
    UnrecognizedFormat { input: String },
}

impl NormalizeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            NormalizeError::EmptyInput => FailureKind::EmptyInput,
            NormalizeError::InvalidSerial { .. } => FailureKind::InvalidSerial,
            NormalizeError::ImplausibleYear { .. } => FailureKind::ImplausibleYear,
            NormalizeError::UnrecognizedFormat { .. } => FailureKind::UnrecognizedFormat,
        }
    }
}

/// Fieldless tag of a [`NormalizeError`], for counting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EmptyInput,
    InvalidSerial,
    ImplausibleYear,
    UnrecognizedFormat,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "empty_input",
            FailureKind::InvalidSerial => "invalid_serial",
            FailureKind::ImplausibleYear => "implausible_year",
            FailureKind::UnrecognizedFormat => "unrecognized_format",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid normalizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum year {min_year} is greater than maximum year {max_year}")]
    InvertedRange { min_year: i32, max_year: i32 },

    #[error("year {year} is outside the supported calendar span 1..=9999")]
    YearOutOfBounds { year: i32 },

    #[error("century pivot {pivot} must be a two-digit value (0..=99)")]
    PivotOutOfBounds { pivot: u8 },
}
