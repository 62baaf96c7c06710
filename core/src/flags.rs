//! `Flag` and `FlagSet` — Fixed modifier vocabulary for candidate patterns
//!
//! The modifier vocabulary is a closed set of four toggles, mirroring the
//! classic regex flag letters:
//!
//! - `i` — case-insensitive matching
//! - `m` — multi-line anchors (`^`/`$` match at internal line boundaries)
//! - `s` — dot matches newline
//! - `x` — free-spacing (verbose) syntax
//!
//! Flag strings are scanned case-insensitively; unrecognized characters are
//! silently ignored. Representing the vocabulary as an enum (rather than
//! scanning characters at the point of use) keeps unsupported-flag handling
//! explicit and testable.

use std::fmt;

/// A single pattern modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Flag {
    /// `i` — letters match regardless of case.
    CaseInsensitive,
    /// `m` — `^` and `$` match at internal line boundaries.
    MultiLine,
    /// `s` — `.` also matches `\n`.
    DotMatchesNewline,
    /// `x` — whitespace and `#` comments in the pattern are ignored
    /// unless escaped.
    Verbose,
}

impl Flag {
    /// All flags, in canonical `imsx` order.
    pub const ALL: [Flag; 4] = [
        Flag::CaseInsensitive,
        Flag::MultiLine,
        Flag::DotMatchesNewline,
        Flag::Verbose,
    ];

    /// Resolve a flag character (case-insensitive).
    ///
    /// Returns `None` for characters outside the vocabulary.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(Self::CaseInsensitive),
            'm' => Some(Self::MultiLine),
            's' => Some(Self::DotMatchesNewline),
            'x' => Some(Self::Verbose),
            _ => None,
        }
    }

    /// The canonical character for this flag.
    #[must_use]
    pub fn as_char(&self) -> char {
        match self {
            Self::CaseInsensitive => 'i',
            Self::MultiLine => 'm',
            Self::DotMatchesNewline => 's',
            Self::Verbose => 'x',
        }
    }
}

/// A set of pattern modifiers.
///
/// # Example
///
/// ```
/// use rxlab::{Flag, FlagSet};
///
/// let flags = FlagSet::parse("im");
/// assert!(flags.contains(Flag::CaseInsensitive));
/// assert!(flags.contains(Flag::MultiLine));
/// assert!(!flags.contains(Flag::Verbose));
///
/// // Unknown characters are ignored
/// assert_eq!(FlagSet::parse("i?z"), FlagSet::parse("i"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagSet(u8);

impl FlagSet {
    /// Create an empty flag set (no modifiers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flags string, scanning case-insensitively.
    ///
    /// Unrecognized characters are silently ignored; an empty string
    /// yields an empty set.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut set = Self::new();
        for c in s.chars() {
            if let Some(flag) = Flag::from_char(c) {
                set.insert(flag);
            }
        }
        set
    }

    /// Add a flag (builder pattern).
    #[must_use]
    pub fn with(mut self, flag: Flag) -> Self {
        self.insert(flag);
        self
    }

    /// Add a flag in place.
    pub fn insert(&mut self, flag: Flag) {
        self.0 |= Self::bit(flag);
    }

    /// Check whether a flag is enabled.
    #[must_use]
    pub fn contains(&self, flag: Flag) -> bool {
        self.0 & Self::bit(flag) != 0
    }

    /// Returns `true` if no flags are enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(flag: Flag) -> u8 {
        match flag {
            Flag::CaseInsensitive => 1 << 0,
            Flag::MultiLine => 1 << 1,
            Flag::DotMatchesNewline => 1 << 2,
            Flag::Verbose => 1 << 3,
        }
    }
}

impl fmt::Display for FlagSet {
    /// Canonical `imsx`-ordered rendering, e.g. `"is"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL {
            if self.contains(flag) {
                write!(f, "{}", flag.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = Self::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_flags() {
        assert!(FlagSet::parse("i").contains(Flag::CaseInsensitive));
        assert!(FlagSet::parse("m").contains(Flag::MultiLine));
        assert!(FlagSet::parse("s").contains(Flag::DotMatchesNewline));
        assert!(FlagSet::parse("x").contains(Flag::Verbose));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let flags = FlagSet::parse("IM");
        assert!(flags.contains(Flag::CaseInsensitive));
        assert!(flags.contains(Flag::MultiLine));
        assert!(!flags.contains(Flag::DotMatchesNewline));
    }

    #[test]
    fn parse_ignores_unknown_characters() {
        assert_eq!(FlagSet::parse("i?z9"), FlagSet::parse("i"));
        assert!(FlagSet::parse("quv").is_empty());
    }

    #[test]
    fn parse_empty_is_empty() {
        assert!(FlagSet::parse("").is_empty());
        assert_eq!(FlagSet::parse(""), FlagSet::new());
    }

    #[test]
    fn display_uses_canonical_order() {
        assert_eq!(FlagSet::parse("xsmi").to_string(), "imsx");
        assert_eq!(FlagSet::parse("si").to_string(), "is");
        assert_eq!(FlagSet::new().to_string(), "");
    }

    #[test]
    fn builder_and_from_iter() {
        let a = FlagSet::new().with(Flag::CaseInsensitive).with(Flag::Verbose);
        let b: FlagSet = [Flag::Verbose, Flag::CaseInsensitive].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_characters_are_idempotent() {
        assert_eq!(FlagSet::parse("iii"), FlagSet::parse("i"));
    }
}
