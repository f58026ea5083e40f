use crate::engine::{self, RunResult, Shape};
use crate::{ConfigError, NormalizeError, Rule};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::date::rules::get);

/// Largest spreadsheet serial accepted (9999-12-31).
pub(crate) const MAX_SERIAL: u64 = 2_958_465;

/// Closed interval of calendar years a normalized date may fall in.
///
/// Anything outside it is treated as a misparse (a two-digit year resolved to
/// the wrong century, a corrupted serial) rather than a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearRangeRepr")]
pub struct YearRange {
    min_year: i32,
    max_year: i32,
}

#[derive(Deserialize)]
struct YearRangeRepr {
    min_year: i32,
    max_year: i32,
}

impl TryFrom<YearRangeRepr> for YearRange {
    type Error = ConfigError;

    fn try_from(repr: YearRangeRepr) -> Result<Self, Self::Error> {
        YearRange::new(repr.min_year, repr.max_year)
    }
}

impl YearRange {
    pub const DEFAULT_MIN_YEAR: i32 = 2020;
    pub const DEFAULT_MAX_YEAR: i32 = 2030;

    pub fn new(min_year: i32, max_year: i32) -> Result<Self, ConfigError> {
        for year in [min_year, max_year] {
            if !(1..=9999).contains(&year) {
                return Err(ConfigError::YearOutOfBounds { year });
            }
        }
        if min_year > max_year {
            return Err(ConfigError::InvertedRange { min_year, max_year });
        }
        Ok(YearRange { min_year, max_year })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange { min_year: Self::DEFAULT_MIN_YEAR, max_year: Self::DEFAULT_MAX_YEAR }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_year, self.max_year)
    }
}

/// How a two-digit year (`15/03/25`) is expanded to a full year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "CenturyRuleRepr")]
pub enum CenturyRule {
    /// Map `yy` to the latest year ending in `yy` that is not after the
    /// range's `max_year`. With the default range this is `yy <= 30 -> 20yy`.
    #[default]
    FromRange,
    /// `yy <= pivot -> 20yy`, otherwise `19yy`.
    Pivot(u8),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum CenturyRuleRepr {
    FromRange,
    Pivot(u8),
}

impl TryFrom<CenturyRuleRepr> for CenturyRule {
    type Error = ConfigError;

    fn try_from(repr: CenturyRuleRepr) -> Result<Self, Self::Error> {
        match repr {
            CenturyRuleRepr::FromRange => Ok(CenturyRule::FromRange),
            CenturyRuleRepr::Pivot(pivot) => CenturyRule::pivot(pivot),
        }
    }
}

impl CenturyRule {
    pub fn pivot(pivot: u8) -> Result<Self, ConfigError> {
        if pivot > 99 {
            return Err(ConfigError::PivotOutOfBounds { pivot });
        }
        Ok(CenturyRule::Pivot(pivot))
    }
}

/// Options that affect normalization besides the year range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub century: CenturyRule,
}

/// A raw spreadsheet cell handed to the normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    /// A numeric cell, read as a spreadsheet day serial. A fractional part is
    /// the time of day and is ignored. A negative number is `InvalidSerial`,
    /// while the text `"-5"` is not a serial at all and is `UnrecognizedFormat`.
    Number(f64),
    Empty,
}

impl<'a> CellValue<'a> {
    /// Reduce the cell to the trimmed text the rules run against.
    fn prepare(self) -> Result<Cow<'a, str>, NormalizeError> {
        match self {
            CellValue::Empty => Err(NormalizeError::EmptyInput),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() { Err(NormalizeError::EmptyInput) } else { Ok(Cow::Borrowed(trimmed)) }
            }
            CellValue::Number(n) => {
                if !n.is_finite() {
                    return Err(NormalizeError::UnrecognizedFormat { input: n.to_string() });
                }
                let whole = n.floor();
                if whole < 1.0 || whole > MAX_SERIAL as f64 {
                    return Err(NormalizeError::InvalidSerial { serial: whole.to_string() });
                }
                Ok(Cow::Owned((whole as u64).to_string()))
            }
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for CellValue<'a> {
    fn from(text: &'a str) -> Self {
        CellValue::Text(text)
    }
}

impl<'a> From<&'a String> for CellValue<'a> {
    fn from(text: &'a String) -> Self {
        CellValue::Text(text.as_str())
    }
}

impl From<f64> for CellValue<'_> {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue<'_> {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue<'_> {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl<'a, T: Into<CellValue<'a>>> From<Option<T>> for CellValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// A normalized `YYYY-MM-DD` date whose year lies in the configured range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate {
    date: NaiveDate,
    text: String,
}

impl CanonicalDate {
    pub(crate) fn from_date(date: NaiveDate) -> Self {
        CanonicalDate { date, text: date.format("%Y-%m-%d").to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<CanonicalDate> for String {
    fn from(date: CanonicalDate) -> Self {
        date.text
    }
}

impl PartialEq<&str> for CanonicalDate {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Diagnostics returned by [`normalize_verbose_with`].
#[derive(Debug, Clone)]
pub struct NormalizeDetails {
    /// Name of the rule that structurally matched, if any rule ran.
    pub rule: Option<&'static str>,
    /// Coarse shape of the trimmed input.
    pub shape: Shape,
    /// Time spent normalizing.
    pub elapsed: Duration,
}

/// Result from [`normalize_verbose_with`].
#[derive(Debug, Clone)]
pub struct NormalizeResultVerbose {
    /// The cell as received.
    pub input: String,
    pub outcome: Result<CanonicalDate, NormalizeError>,
    pub details: NormalizeDetails,
}

/// Normalize `value` with default [`Options`].
///
/// # Example
/// ```
/// use flexdate::{YearRange, normalize};
///
/// let date = normalize("15/03/25", &YearRange::default()).unwrap();
/// assert_eq!(date.as_str(), "2025-03-15");
/// ```
pub fn normalize<'a>(value: impl Into<CellValue<'a>>, range: &YearRange) -> Result<CanonicalDate, NormalizeError> {
    normalize_with(value, range, &Options::default())
}

/// Normalize `value` into a canonical date inside `range`.
///
/// Patterns are tried in a fixed order and the first structural match
/// decides the outcome; a failure never falls through to a later pattern.
pub fn normalize_with<'a>(
    value: impl Into<CellValue<'a>>,
    range: &YearRange,
    options: &Options,
) -> Result<CanonicalDate, NormalizeError> {
    let value = value.into();
    let run = run_cell(value, range, options);
    trace_outcome(&value, &run);
    run.outcome
}

/// Like [`normalize_with`], but also reports which rule matched and how long
/// it took.
pub fn normalize_verbose_with<'a>(
    value: impl Into<CellValue<'a>>,
    range: &YearRange,
    options: &Options,
) -> NormalizeResultVerbose {
    let value = value.into();
    let start = Instant::now();
    let run = run_cell(value, range, options);
    let elapsed = start.elapsed();
    trace_outcome(&value, &run);

    NormalizeResultVerbose {
        input: value.to_string(),
        details: NormalizeDetails { rule: run.rule, shape: run.shape, elapsed },
        outcome: run.outcome,
    }
}

fn run_cell(value: CellValue<'_>, range: &YearRange, options: &Options) -> RunResult {
    match value.prepare() {
        Ok(text) => engine::run(&DEFAULT_RULES, &text, range, options),
        Err(err) => RunResult::rejected(err),
    }
}

fn trace_outcome(value: &CellValue<'_>, run: &RunResult) {
    match &run.outcome {
        Ok(date) => tracing::debug!(input = %value, rule = run.rule, date = %date, "normalized date"),
        Err(err) => tracing::debug!(input = %value, rule = run.rule, kind = %err.kind(), error = %err, "rejected date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn year_range_rejects_inverted_and_out_of_span() {
        assert_eq!(YearRange::new(2030, 2020), Err(ConfigError::InvertedRange { min_year: 2030, max_year: 2020 }));
        assert_eq!(YearRange::new(0, 2020), Err(ConfigError::YearOutOfBounds { year: 0 }));
        assert_eq!(YearRange::new(2020, 10_000), Err(ConfigError::YearOutOfBounds { year: 10_000 }));
        assert!(YearRange::new(2025, 2025).is_ok());
    }

    #[test]
    fn year_range_deserialization_validates() {
        let range: YearRange = serde_json::from_str(r#"{"min_year":2019,"max_year":2031}"#).unwrap();
        assert_eq!((range.min_year(), range.max_year()), (2019, 2031));
        assert!(serde_json::from_str::<YearRange>(r#"{"min_year":2031,"max_year":2019}"#).is_err());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.century, CenturyRule::FromRange);
        let opts: Options = serde_json::from_str(r#"{"century":{"pivot":30}}"#).unwrap();
        assert_eq!(opts.century, CenturyRule::Pivot(30));
    }

    #[test]
    fn options_deserialization_validates_pivot() {
        assert!(serde_json::from_str::<Options>(r#"{"century":{"pivot":150}}"#).is_err());
        let opts: Options = serde_json::from_str(r#"{"century":"from_range"}"#).unwrap();
        assert_eq!(opts.century, CenturyRule::FromRange);
    }

    #[test]
    fn century_pivot_must_be_two_digits() {
        assert_eq!(CenturyRule::pivot(30), Ok(CenturyRule::Pivot(30)));
        assert_eq!(CenturyRule::pivot(100), Err(ConfigError::PivotOutOfBounds { pivot: 100 }));
    }

    #[test]
    fn normalize_accepts_strings_and_numbers() {
        let range = YearRange::default();
        assert_eq!(normalize("2025-03-15", &range).unwrap(), "2025-03-15");
        assert_eq!(normalize(45000_i64, &range).unwrap(), "2023-03-15");
        assert_eq!(normalize(45000.75, &range).unwrap(), "2023-03-15");
        assert_eq!(normalize(None::<&str>, &range).unwrap_err(), NormalizeError::EmptyInput);
    }

    #[test]
    fn numeric_cells_outside_serial_domain() {
        let range = YearRange::default();
        assert_eq!(normalize(0.5, &range).unwrap_err().kind(), FailureKind::InvalidSerial);
        assert_eq!(normalize(-3_i64, &range).unwrap_err().kind(), FailureKind::InvalidSerial);
        assert_eq!(normalize("-3", &range).unwrap_err().kind(), FailureKind::UnrecognizedFormat);
        assert_eq!(normalize(2_958_466_i64, &range).unwrap_err().kind(), FailureKind::InvalidSerial);
        assert_eq!(normalize(f64::NAN, &range).unwrap_err().kind(), FailureKind::UnrecognizedFormat);
    }

    #[test]
    fn canonical_date_exposes_text_and_date() {
        let date = normalize(" 5/3/2025 ", &YearRange::default()).unwrap();
        assert_eq!(date.as_str(), "2025-03-05");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2025-03-05\"");
    }

    #[test]
    fn verbose_reports_matched_rule() {
        let res = normalize_verbose_with("15/03/25", &YearRange::default(), &Options::default());
        assert_eq!(res.input, "15/03/25");
        assert_eq!(res.outcome.unwrap(), "2025-03-15");
        assert_eq!(res.details.rule, Some("dd/mm/yy"));
        assert!(res.details.shape.contains(Shape::HAS_SLASH));
    }

    #[test]
    fn verbose_reports_no_rule_for_empty_input() {
        let res = normalize_verbose_with("   ", &YearRange::default(), &Options::default());
        assert_eq!(res.outcome.unwrap_err(), NormalizeError::EmptyInput);
        assert_eq!(res.details.rule, None);
    }
}
