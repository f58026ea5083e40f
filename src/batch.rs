//! Column-level normalization for spreadsheet imports.
//!
//! The import pipeline hands over every date-designated cell of a column;
//! this module normalizes each one independently and collects failures into
//! the per-row problem list the review screen is built from. A single bad
//! cell never stops the column.

use crate::{CanonicalDate, CellValue, FailureKind, NormalizeError, Options, YearRange, normalize_with};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

/// Problem label shown for an empty date cell.
pub const LABEL_MISSING: &str = "date manquante";
/// Problem label shown for a date cell that could not be normalized.
pub const LABEL_INVALID: &str = "date invalide";

/// One normalized (or rejected) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    /// 1-based row number within the column.
    pub row: usize,
    /// The cell as received.
    pub input: String,
    pub outcome: Result<CanonicalDate, NormalizeError>,
}

impl Serialize for RowOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RowOutcome", 4)?;
        state.serialize_field("row", &self.row)?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("date", &self.outcome.as_ref().ok())?;
        state.serialize_field("error", &self.outcome.as_ref().err())?;
        state.end()
    }
}

/// A row flagged for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowProblem {
    pub row: usize,
    pub kind: FailureKind,
    /// Operator-facing label (`date manquante` / `date invalide`).
    pub label: &'static str,
    /// Detailed reason.
    pub message: String,
}

impl RowProblem {
    fn from_error(row: usize, err: &NormalizeError) -> Self {
        let kind = err.kind();
        let label = match kind {
            FailureKind::EmptyInput => LABEL_MISSING,
            _ => LABEL_INVALID,
        };
        RowProblem { row, kind, label, message: err.to_string() }
    }
}

/// Counts over a [`ColumnReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub total: usize,
    pub normalized: usize,
    pub failures: BTreeMap<FailureKind, usize>,
}

/// Result of [`normalize_column`].
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub summary: ColumnSummary,
    pub rows: Vec<RowOutcome>,
    pub problems: Vec<RowProblem>,
}

impl ColumnReport {
    fn from_rows(rows: Vec<RowOutcome>) -> Self {
        let mut summary = ColumnSummary { total: rows.len(), ..ColumnSummary::default() };
        let mut problems = Vec::new();

        for row in &rows {
            match &row.outcome {
                Ok(_) => summary.normalized += 1,
                Err(err) => {
                    *summary.failures.entry(err.kind()).or_default() += 1;
                    problems.push(RowProblem::from_error(row.row, err));
                }
            }
        }

        ColumnReport { summary, rows, problems }
    }

    /// Whether every cell normalized.
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Canonical dates in row order, `None` where the row needs review.
    pub fn dates(&self) -> impl Iterator<Item = Option<&CanonicalDate>> {
        self.rows.iter().map(|row| row.outcome.as_ref().ok())
    }
}

/// Normalize every cell of a column.
///
/// Each cell is isolated: a panic inside a parsing library is caught and
/// reported for that row as `UnrecognizedFormat`.
pub fn normalize_column<'a, I, V>(values: I, range: &YearRange, options: &Options) -> ColumnReport
where
    I: IntoIterator<Item = V>,
    V: Into<CellValue<'a>>,
{
    let span = tracing::debug_span!("normalize_column", range = %range);
    let _enter = span.enter();

    let rows: Vec<RowOutcome> = values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let cell = value.into();
            let row = idx + 1;
            let input = cell.to_string();
            let outcome = guarded(row, &input, || normalize_with(cell, range, options));
            RowOutcome { row, input, outcome }
        })
        .collect();

    let report = ColumnReport::from_rows(rows);
    tracing::info!(
        total = report.summary.total,
        normalized = report.summary.normalized,
        problems = report.problems.len(),
        "normalized date column"
    );
    report
}

/// Run the normalization of one cell, turning a panic into `UnrecognizedFormat`.
fn guarded<F>(row: usize, input: &str, normalize_cell: F) -> Result<CanonicalDate, NormalizeError>
where
    F: FnOnce() -> Result<CanonicalDate, NormalizeError>,
{
    panic::catch_unwind(AssertUnwindSafe(normalize_cell)).unwrap_or_else(|_| {
        tracing::warn!(row, input, "date parsing panicked; treating the cell as unrecognized");
        Err(NormalizeError::UnrecognizedFormat { input: input.to_string() })
    })
}
