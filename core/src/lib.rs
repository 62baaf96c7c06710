//! rxlab - Regex example-validation engine
//!
//! A small engine for iterative regex refinement: collect labeled examples
//! (an input string paired with the exact substring a pattern must extract),
//! then evaluate candidate patterns against all of them until every example
//! passes.
//!
//! # Architecture
//!
//! - [`Example`] / [`ExampleSet`] — Ordered collection of labeled requirements
//! - [`Flag`] / [`FlagSet`] — Fixed modifier vocabulary (`i`, `m`, `s`, `x`)
//! - [`PatternSpec`] — A candidate pattern + flags; compiles to a `regex::Regex`
//! - [`EvalReport`] — Per-example verdicts plus aggregate counts
//!
//! # Key Design Insights
//!
//! 1. **Spec vs engine**: [`PatternSpec`] is what the user wrote; the compiled
//!    `regex::Regex` is what evaluates. Compilation failure is data, not a
//!    panic — the example set is never touched by evaluation.
//!
//! 2. **Exact full-span semantics**: a PASS requires the leftmost match's
//!    entire span to equal the expected substring. Merely containing it is
//!    not enough.
//!
//! 3. **Mismatches are data**: per-example failures fold into the report;
//!    only compile failures and the empty-set case short-circuit.
//!
//! # Example
//!
//! ```
//! use rxlab::prelude::*;
//!
//! let mut examples = ExampleSet::new();
//! examples.append(Example::new("Contact: john@example.com", "john@example.com"));
//!
//! let spec = PatternSpec::new(
//!     r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
//!     FlagSet::default(),
//! );
//! let report = spec.evaluate(&examples).unwrap();
//!
//! assert!(report.all_passed());
//! assert_eq!(report.passed(), 1);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod evaluator;
mod example;
mod flags;
mod report;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use evaluator::PatternSpec;
pub use example::{Example, ExampleSet};
pub use flags::{Flag, FlagSet};
pub use report::{CaseOutcome, EvalReport, Verdict};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use rxlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CaseOutcome, EvalError, EvalReport, Example, ExampleSet, Flag, FlagSet, PatternSpec,
        Verdict,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length for candidate patterns.
///
/// Regex compilation is expensive even with the linear-time Rust `regex`
/// crate, and every evaluation call compiles the pattern fresh. Patterns
/// beyond this length are rejected before compilation.
pub const MAX_PATTERN_LENGTH: usize = 4096;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from pattern evaluation.
///
/// All variants are recoverable: the example set is unaffected and
/// subsequent evaluations proceed normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Evaluation was requested with zero stored examples.
    NoExamples,
    /// The candidate pattern failed to compile under the resolved flags.
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex diagnostic.
        source: String,
    },
    /// The candidate pattern exceeds [`MAX_PATTERN_LENGTH`].
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoExamples => {
                write!(
                    f,
                    "no examples defined — add at least one example before testing a pattern"
                )
            }
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern \"{pattern}\": {source}")
            }
            Self::PatternTooLong { len, max } => {
                write!(f, "pattern length is {len}, but maximum allowed is {max}")
            }
        }
    }
}

impl std::error::Error for EvalError {}
