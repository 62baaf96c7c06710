//! `PatternSpec` — Candidate pattern compilation and evaluation
//!
//! This type represents the user's *candidate*: a pattern string plus a
//! modifier set. It compiles to a runtime `regex::Regex` via
//! [`compile()`](PatternSpec::compile) and evaluates against an
//! [`ExampleSet`] via [`evaluate()`](PatternSpec::evaluate).
//!
//! # Naming: Spec vs Regex
//!
//! - [`PatternSpec`] = what the user wrote (pattern text + flags)
//! - `regex::Regex` = the engine that evaluates at match time
//!
//! Compilation failure is a value ([`EvalError::InvalidPattern`]), never a
//! panic; the example set is read-only during evaluation.

use crate::report::{CaseOutcome, EvalReport, Verdict};
use crate::{EvalError, ExampleSet, Flag, FlagSet, MAX_PATTERN_LENGTH};
use regex::{Regex, RegexBuilder};

/// A candidate pattern with its modifier set.
///
/// # Example
///
/// ```
/// use rxlab::prelude::*;
///
/// let mut examples = ExampleSet::new();
/// examples.append(Example::new("HELLO world", "HELLO"));
///
/// let spec = PatternSpec::new("hello", FlagSet::parse("i"));
/// let report = spec.evaluate(&examples).unwrap();
/// assert!(report.all_passed());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSpec {
    pattern: String,
    #[cfg_attr(feature = "serde", serde(default))]
    flags: FlagSet,
}

impl PatternSpec {
    /// Create a spec from a pattern string and modifier set.
    pub fn new(pattern: impl Into<String>, flags: FlagSet) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
        }
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the modifier set.
    #[must_use]
    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    /// Compile this spec under its modifier set.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::PatternTooLong`] if the pattern exceeds
    /// [`MAX_PATTERN_LENGTH`], or [`EvalError::InvalidPattern`] carrying
    /// the regex diagnostic if compilation fails.
    pub fn compile(&self) -> Result<Regex, EvalError> {
        if self.pattern.len() > MAX_PATTERN_LENGTH {
            return Err(EvalError::PatternTooLong {
                len: self.pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        RegexBuilder::new(&self.pattern)
            .case_insensitive(self.flags.contains(Flag::CaseInsensitive))
            .multi_line(self.flags.contains(Flag::MultiLine))
            .dot_matches_new_line(self.flags.contains(Flag::DotMatchesNewline))
            .ignore_whitespace(self.flags.contains(Flag::Verbose))
            .build()
            .map_err(|e| EvalError::InvalidPattern {
                pattern: self.pattern.clone(),
                source: e.to_string(),
            })
    }

    /// Evaluate this spec against every example, in insertion order.
    ///
    /// An example PASSES only when a leftmost match exists AND its full
    /// span equals the example's expected substring exactly. A missing
    /// match, or a match whose span differs even by surrounding
    /// characters, FAILS.
    ///
    /// Idempotent: the same spec against an unchanged set always yields
    /// identical verdicts and counts.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NoExamples`] when the set is empty (no
    /// compilation is attempted), or a compile error from
    /// [`compile()`](Self::compile).
    pub fn evaluate(&self, examples: &ExampleSet) -> Result<EvalReport, EvalError> {
        if examples.is_empty() {
            return Err(EvalError::NoExamples);
        }

        let regex = self.compile()?;

        let outcomes = examples
            .iter()
            .enumerate()
            .map(|(i, example)| {
                let matched = regex.find(&example.input).map(|m| m.as_str().to_string());
                let verdict = match matched.as_deref() {
                    Some(span) if span == example.expected => Verdict::Pass,
                    _ => Verdict::Fail,
                };
                CaseOutcome {
                    index: i + 1,
                    example: example.clone(),
                    matched,
                    verdict,
                }
            })
            .collect();

        Ok(EvalReport::new(self.clone(), outcomes))
    }
}
