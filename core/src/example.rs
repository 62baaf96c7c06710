//! `Example` and `ExampleSet` — Labeled requirements for a candidate pattern
//!
//! An [`Example`] pairs an input string (the haystack) with the exact
//! substring a candidate pattern must isolate from it. An [`ExampleSet`] is
//! an ordered, append-only collection of examples: insertion order determines
//! both the numbering in reports and the order of evaluation.

use std::fmt;

/// One labeled requirement: an input string and the expected match.
///
/// Examples are immutable once appended to an [`ExampleSet`] — there is no
/// update operation, only append and bulk-clear.
///
/// # Example
///
/// ```
/// use rxlab::Example;
///
/// let ex = Example::new("Contact: john@example.com", "john@example.com")
///     .with_note("plain email");
/// assert_eq!(ex.expected, "john@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    /// The input string to run the pattern against.
    pub input: String,
    /// The exact substring the pattern must match. Compared against the
    /// full span of the leftmost match — surrounding characters fail it.
    pub expected: String,
    /// Optional annotation. Display-only; has no effect on evaluation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl Example {
    /// Create an example with an empty note.
    ///
    /// Both fields may be empty strings — no validation is applied.
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            note: String::new(),
        }
    }

    /// Attach a note (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Returns `true` if this example carries a non-empty note.
    #[must_use]
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" => \"{}\"", self.input, self.expected)
    }
}

/// Ordered, append-only collection of [`Example`]s.
///
/// Owned state, not a global: the hosting service holds one `ExampleSet`
/// by value for its lifetime. Created empty, mutated by append/clear,
/// discarded at process end.
///
/// # INV: Insertion order is preserved
///
/// `iter()` yields examples in exactly the order they were appended.
/// Report numbering (1-based) follows the same order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleSet {
    examples: Vec<Example>,
}

impl ExampleSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an example, returning the new total count.
    ///
    /// No deduplication and no validation — empty strings are accepted.
    pub fn append(&mut self, example: Example) -> usize {
        self.examples.push(example);
        self.examples.len()
    }

    /// Remove all examples, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.examples.len();
        self.examples.clear();
        count
    }

    /// Iterate over examples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    /// Returns the number of stored examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns `true` if no examples are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExampleSet {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_running_count() {
        let mut set = ExampleSet::new();
        assert_eq!(set.append(Example::new("a", "a")), 1);
        assert_eq!(set.append(Example::new("b", "b")), 2);
        assert_eq!(set.append(Example::new("c", "c")), 3);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut set = ExampleSet::new();
        set.append(Example::new("first", "f"));
        set.append(Example::new("second", "s"));
        set.append(Example::new("third", "t"));

        let inputs: Vec<&str> = set.iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["first", "second", "third"]);
    }

    #[test]
    fn clear_returns_removed_count() {
        let mut set = ExampleSet::new();
        set.append(Example::new("a", "a"));
        set.append(Example::new("b", "b"));

        assert_eq!(set.clear(), 2);
        assert!(set.is_empty());
        assert_eq!(set.clear(), 0);
    }

    #[test]
    fn note_defaults_to_empty() {
        let ex = Example::new("input", "expected");
        assert_eq!(ex.note, "");
        assert!(!ex.has_note());

        let ex = ex.with_note("checks the basic case");
        assert!(ex.has_note());
    }

    #[test]
    fn empty_fields_are_accepted() {
        let mut set = ExampleSet::new();
        assert_eq!(set.append(Example::new("", "")), 1);
    }

    #[test]
    fn display_format() {
        let ex = Example::new("hello world", "hello");
        assert_eq!(ex.to_string(), "\"hello world\" => \"hello\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn note_defaults_when_deserialized() {
        let ex: Example =
            serde_json::from_str(r#"{"input":"a","expected":"a"}"#).unwrap();
        assert_eq!(ex.note, "");
    }
}
