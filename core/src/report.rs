//! Evaluation report types — per-example verdicts and text rendering
//!
//! An [`EvalReport`] captures one evaluation of a [`PatternSpec`] against an
//! [`ExampleSet`](crate::ExampleSet): one [`CaseOutcome`] per example, in
//! set order, plus aggregate counts. Reports are transient values — they are
//! produced, rendered, and discarded; nothing is persisted.
//!
//! # INV: counts match outcomes
//!
//! `passed() + failed()` always equals `outcomes().len()`, and
//! `all_passed()` is true iff `failed() == 0` and at least one outcome
//! exists.

use crate::{Example, PatternSpec};
use std::fmt;

/// PASS or FAIL outcome for one example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// The leftmost match's full span equals the expected substring.
    Pass,
    /// No match, or the matched span differs from the expected substring.
    Fail,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Pass`].
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// One example's evaluation outcome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseOutcome {
    /// 1-based position in the example set.
    pub index: usize,
    /// The example that was evaluated (carried for display).
    pub example: Example,
    /// Full text of the leftmost match, or `None` when nothing matched.
    pub matched: Option<String>,
    /// The verdict for this example.
    pub verdict: Verdict,
}

/// Result of evaluating a [`PatternSpec`] against a whole example set.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalReport {
    spec: PatternSpec,
    outcomes: Vec<CaseOutcome>,
    passed: usize,
    failed: usize,
}

impl EvalReport {
    /// Build a report from per-example outcomes, computing the aggregates.
    #[must_use]
    pub fn new(spec: PatternSpec, outcomes: Vec<CaseOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.verdict.is_pass()).count();
        let failed = outcomes.len() - passed;
        Self {
            spec,
            outcomes,
            passed,
            failed,
        }
    }

    /// The spec this report was produced for.
    #[must_use]
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Per-example outcomes, in example-set order.
    #[must_use]
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    /// Number of examples that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of examples that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// `true` iff nothing failed and at least one example was evaluated.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && !self.outcomes.is_empty()
    }
}

const RULE: &str = "--------------------------------------------------";

impl fmt::Display for EvalReport {
    /// Human-readable report: header, one block per example, summary line,
    /// and a closing remark distinguishing all-passed from some-failed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Testing pattern: {}", self.spec.pattern())?;
        if !self.spec.flags().is_empty() {
            writeln!(f, "Flags: {}", self.spec.flags())?;
        }
        writeln!(f, "{RULE}")?;

        for outcome in &self.outcomes {
            let (glyph, label) = match outcome.verdict {
                Verdict::Pass => ("✅", "PASSED"),
                Verdict::Fail => ("❌", "FAILED"),
            };
            writeln!(f, "{glyph} Example {}: {label}", outcome.index)?;
            writeln!(f, "   Input: '{}'", outcome.example.input)?;
            writeln!(f, "   Expected: '{}'", outcome.example.expected)?;
            match (&outcome.matched, outcome.verdict) {
                (Some(span), Verdict::Pass) => writeln!(f, "   Matched: '{span}'")?,
                (Some(span), Verdict::Fail) => {
                    writeln!(f, "   Matched: '{span}' (differs from expected)")?;
                }
                (None, _) => writeln!(f, "   Matched: None")?,
            }
            if outcome.example.has_note() {
                writeln!(f, "   Note: {}", outcome.example.note)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "Summary: {} passed, {} failed", self.passed, self.failed)?;

        if self.all_passed() {
            write!(f, "🎉 All examples passed! The pattern satisfies every requirement.")
        } else {
            write!(f, "💡 Some examples failed. Consider adjusting the pattern.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlagSet;

    fn outcome(index: usize, example: Example, matched: Option<&str>, verdict: Verdict) -> CaseOutcome {
        CaseOutcome {
            index,
            example,
            matched: matched.map(String::from),
            verdict,
        }
    }

    #[test]
    fn aggregates_are_computed() {
        let report = EvalReport::new(
            PatternSpec::new("x", FlagSet::new()),
            vec![
                outcome(1, Example::new("x", "x"), Some("x"), Verdict::Pass),
                outcome(2, Example::new("y", "x"), None, Verdict::Fail),
            ],
        );
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn all_passed_requires_at_least_one_outcome() {
        let report = EvalReport::new(PatternSpec::new("x", FlagSet::new()), vec![]);
        assert!(!report.all_passed());
    }

    #[test]
    fn render_pass_block() {
        let report = EvalReport::new(
            PatternSpec::new("hello", FlagSet::new()),
            vec![outcome(
                1,
                Example::new("hello world", "hello"),
                Some("hello"),
                Verdict::Pass,
            )],
        );
        let text = report.to_string();
        assert!(text.contains("Testing pattern: hello"));
        assert!(!text.contains("Flags:"));
        assert!(text.contains("✅ Example 1: PASSED"));
        assert!(text.contains("Input: 'hello world'"));
        assert!(text.contains("Expected: 'hello'"));
        assert!(text.contains("Matched: 'hello'"));
        assert!(text.contains("Summary: 1 passed, 0 failed"));
        assert!(text.contains("All examples passed"));
    }

    #[test]
    fn render_fail_blocks() {
        let report = EvalReport::new(
            PatternSpec::new("hel", FlagSet::parse("i")),
            vec![
                outcome(
                    1,
                    Example::new("hello", "hello").with_note("greeting"),
                    Some("hel"),
                    Verdict::Fail,
                ),
                outcome(2, Example::new("bye", "hello"), None, Verdict::Fail),
            ],
        );
        let text = report.to_string();
        assert!(text.contains("Flags: i"));
        assert!(text.contains("❌ Example 1: FAILED"));
        assert!(text.contains("Matched: 'hel' (differs from expected)"));
        assert!(text.contains("Note: greeting"));
        assert!(text.contains("Matched: None"));
        assert!(text.contains("Summary: 0 passed, 2 failed"));
        assert!(text.contains("Some examples failed"));
    }
}
