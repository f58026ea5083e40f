//! Ordered first-match dispatch over the rule list.

use super::resolve::resolve;
use super::trigger::Shape;
use crate::{CanonicalDate, Matched, NormalizeError, Options, Pattern, Rule, YearRange};

/// Outcome of running the rule list over one cell.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub shape: Shape,
    /// Rule that structurally matched, if any.
    pub rule: Option<&'static str>,
    pub outcome: Result<CanonicalDate, NormalizeError>,
}

impl RunResult {
    /// A cell rejected before any rule ran (empty, or a bad numeric cell).
    pub fn rejected(err: NormalizeError) -> Self {
        RunResult { shape: Shape::empty(), rule: None, outcome: Err(err) }
    }
}

/// Run `rules` in order over the trimmed, non-empty `text`.
pub fn run(rules: &[Rule], text: &str, range: &YearRange, options: &Options) -> RunResult {
    let shape = Shape::scan(text);

    let Some((rule, matched)) = first_match(rules, text, shape) else {
        return RunResult {
            shape,
            rule: None,
            outcome: Err(NormalizeError::UnrecognizedFormat { input: text.to_string() }),
        };
    };

    let outcome = (rule.production)(&matched, range, options).and_then(|parts| resolve(parts, text, range));
    RunResult { shape, rule: Some(rule.name), outcome }
}

/// Return the first rule (in list order) whose pattern accepts `text`.
fn first_match<'r, 't>(rules: &'r [Rule], text: &'t str, shape: Shape) -> Option<(&'r Rule, Matched<'t>)> {
    rules
        .iter()
        .filter(|rule| shape.contains(rule.shape))
        .find_map(|rule| match_pattern(&rule.pattern, text).map(|matched| (rule, matched)))
}

fn match_pattern<'t>(pattern: &Pattern, text: &'t str) -> Option<Matched<'t>> {
    match pattern {
        Pattern::Regex(re) => {
            let caps = re.captures(text)?;
            let groups = caps.iter().map(|g| g.map_or("", |m| m.as_str())).collect();
            Some(Matched { text, groups })
        }
        Pattern::Predicate(accepts) => accepts(text).then(|| Matched { text, groups: vec![text] }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateParts, FailureKind};

    fn fixed(year: i32) -> Result<DateParts, NormalizeError> {
        Ok(DateParts { year, month: 1, day: 1 })
    }

    fn rules() -> Vec<Rule> {
        vec![
            rule! {
                name: "digits",
                pattern: re!(r"^\d+$"),
                shape: Shape::DIGITS_ONLY,
                prod: |_m, _range, _opts| { fixed(2021) }
            },
            rule! {
                name: "anything",
                pattern: pred!(|_| true),
                prod: |_m, _range, _opts| { fixed(2022) }
            },
        ]
    }

    #[test]
    fn first_structural_match_wins() {
        let rules = rules();
        let run = run(&rules, "123", &YearRange::default(), &Options::default());
        assert_eq!(run.rule, Some("digits"));
        assert_eq!(run.outcome.unwrap(), "2021-01-01");
    }

    #[test]
    fn shape_gating_skips_rules() {
        let rules = rules();
        let run = run(&rules, "12a", &YearRange::default(), &Options::default());
        assert_eq!(run.rule, Some("anything"));
    }

    #[test]
    fn failed_validation_does_not_fall_through() {
        let rules = rules();
        let range = YearRange::new(2022, 2022).unwrap();
        let run = run(&rules, "123", &range, &Options::default());
        assert_eq!(run.rule, Some("digits"));
        assert_eq!(run.outcome.unwrap_err().kind(), FailureKind::ImplausibleYear);
    }

    #[test]
    fn no_rule_is_unrecognized() {
        let run = run(&[], "x", &YearRange::default(), &Options::default());
        assert_eq!(run.rule, None);
        assert_eq!(run.outcome.unwrap_err().kind(), FailureKind::UnrecognizedFormat);
    }
}
