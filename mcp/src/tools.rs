//! Tool definitions and dispatch for the example-validation tool surface.
//!
//! Four tools, all returning single text payloads:
//!
//! | Tool | Required | Optional |
//! |------|----------|----------|
//! | `add_example` | `input`, `expected` | `note` |
//! | `test_pattern` | `pattern` | `flags` |
//! | `list_examples` | — | — |
//! | `clear_examples` | — | — |
//!
//! Missing string fields deserialize to empty strings rather than erroring —
//! an inherited permissive quirk, kept deliberately. The only dispatch-level
//! failure is an unknown tool name, modeled as [`ToolError::UnknownTool`] so
//! the transport adapter decides how to surface it.

use rxlab::{EvalError, Example, ExampleSet, FlagSet, PatternSpec};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::fmt::Write as _;

/// Tool names, in registration order.
pub const TOOL_NAMES: [&str; 4] = [
    "add_example",
    "test_pattern",
    "list_examples",
    "clear_examples",
];

/// A tool definition as advertised by `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The four tool definitions with their JSON Schemas.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "add_example",
            description: "Add a labeled example for pattern validation. Each example pairs \
                          an input string with the exact substring the pattern must match.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "The input string to test the pattern against"
                    },
                    "expected": {
                        "type": "string",
                        "description": "The exact substring the pattern must match in the input"
                    },
                    "note": {
                        "type": "string",
                        "description": "Optional note describing what this example checks"
                    }
                },
                "required": ["input", "expected"]
            }),
        },
        ToolDef {
            name: "test_pattern",
            description: "Test a candidate pattern against all stored examples and report \
                          per-example pass/fail plus a summary.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "The regex pattern to test"
                    },
                    "flags": {
                        "type": "string",
                        "description": "Optional flags: any subset of 'i' (case-insensitive), \
                                        'm' (multi-line), 's' (dot matches newline), 'x' (verbose). \
                                        Default is no flags.",
                        "default": ""
                    }
                },
                "required": ["pattern"]
            }),
        },
        ToolDef {
            name: "list_examples",
            description: "List all stored examples, in the order they were added.",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "clear_examples",
            description: "Clear all stored examples to start fresh with new requirements.",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Dispatch-level failures.
///
/// Per-example mismatches and pattern compile failures are NOT errors here —
/// they are folded into the tool's text response. Only protocol mismatches
/// (a tool name outside the fixed set, or non-object arguments) reach the
/// transport as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool name is not in the registered set.
    UnknownTool {
        /// The unregistered tool name.
        name: String,
        /// Tools that ARE registered (for self-correcting error messages).
        available: Vec<&'static str>,
    },
    /// Arguments failed to deserialize for the named tool.
    InvalidArguments {
        /// The tool whose arguments were malformed.
        tool: &'static str,
        /// The underlying deserialization diagnostic.
        source: String,
    },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool { name, available } => {
                write!(
                    f,
                    "unknown tool \"{name}\" — registered: {}",
                    available.join(", ")
                )
            }
            Self::InvalidArguments { tool, source } => {
                write!(f, "invalid arguments for \"{tool}\": {source}")
            }
        }
    }
}

impl std::error::Error for ToolError {}

// ═══════════════════════════════════════════════════════════════════════════════
// Arguments
// ═══════════════════════════════════════════════════════════════════════════════

// Absent fields default to empty strings: a request missing `input` or
// `expected` appends an example with empty text instead of failing.
#[derive(Debug, Deserialize)]
struct AddExampleArgs {
    #[serde(default)]
    input: String,
    #[serde(default)]
    expected: String,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
struct TestPatternArgs {
    #[serde(default)]
    pattern: String,
    #[serde(default)]
    flags: String,
}

fn parse_args<T: serde::de::DeserializeOwned>(
    tool: &'static str,
    args: &Value,
) -> Result<T, ToolError> {
    // A missing arguments object is treated like an empty one
    let value = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args.clone()
    };
    serde_json::from_value(value).map_err(|e| ToolError::InvalidArguments {
        tool,
        source: e.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// Dispatch
// ═══════════════════════════════════════════════════════════════════════════════

/// Run one tool call against the example set, returning the response text.
///
/// # Errors
///
/// Returns [`ToolError::UnknownTool`] for names outside the fixed set, or
/// [`ToolError::InvalidArguments`] when arguments fail to deserialize.
pub fn dispatch(examples: &mut ExampleSet, name: &str, args: &Value) -> Result<String, ToolError> {
    match name {
        "add_example" => {
            let args: AddExampleArgs = parse_args("add_example", args)?;
            Ok(add_example(examples, args))
        }
        "test_pattern" => {
            let args: TestPatternArgs = parse_args("test_pattern", args)?;
            Ok(test_pattern(examples, &args))
        }
        "list_examples" => Ok(list_examples(examples)),
        "clear_examples" => Ok(clear_examples(examples)),
        other => Err(ToolError::UnknownTool {
            name: other.to_string(),
            available: TOOL_NAMES.to_vec(),
        }),
    }
}

fn add_example(examples: &mut ExampleSet, args: AddExampleArgs) -> String {
    let example = Example::new(args.input, args.expected).with_note(args.note);
    let note = if example.has_note() {
        example.note.clone()
    } else {
        "None".to_string()
    };
    let text = format!(
        "Added example:\n- Input: '{}'\n- Expected match: '{}'\n- Note: {}",
        example.input, example.expected, note
    );
    let count = examples.append(example);
    format!("{text}\n\nTotal examples: {count}")
}

fn test_pattern(examples: &ExampleSet, args: &TestPatternArgs) -> String {
    let spec = PatternSpec::new(&args.pattern, FlagSet::parse(&args.flags));
    match spec.evaluate(examples) {
        Ok(report) => report.to_string(),
        Err(EvalError::NoExamples) => {
            "No examples defined. Add examples first using add_example.".to_string()
        }
        // Compile failure / over-length pattern: a notice, not a protocol error
        Err(e) => e.to_string(),
    }
}

fn list_examples(examples: &ExampleSet) -> String {
    if examples.is_empty() {
        return "No examples defined yet. Use add_example to add requirements for your pattern."
            .to_string();
    }

    let mut text = String::from("Current examples:\n");
    text.push_str("========================================\n");
    for (i, example) in examples.iter().enumerate() {
        let _ = writeln!(text, "Example {}:", i + 1);
        let _ = writeln!(text, "  Input: '{}'", example.input);
        let _ = writeln!(text, "  Expected match: '{}'", example.expected);
        if example.has_note() {
            let _ = writeln!(text, "  Note: {}", example.note);
        }
        text.push('\n');
    }
    let _ = write!(text, "Total: {} example(s)", examples.len());
    text
}

fn clear_examples(examples: &mut ExampleSet) -> String {
    let count = examples.clear();
    format!("Cleared all examples. Removed {count} example(s).")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_example_returns_running_count() {
        let mut set = ExampleSet::new();
        let text = dispatch(
            &mut set,
            "add_example",
            &json!({"input": "hello world", "expected": "hello", "note": "greeting"}),
        )
        .unwrap();
        assert!(text.contains("Added example"));
        assert!(text.contains("Input: 'hello world'"));
        assert!(text.contains("Note: greeting"));
        assert!(text.contains("Total examples: 1"));

        let text = dispatch(
            &mut set,
            "add_example",
            &json!({"input": "b", "expected": "b"}),
        )
        .unwrap();
        assert!(text.contains("Note: None"));
        assert!(text.contains("Total examples: 2"));
    }

    #[test]
    fn add_example_defaults_missing_fields_to_empty() {
        let mut set = ExampleSet::new();
        let text = dispatch(&mut set, "add_example", &json!({})).unwrap();
        assert!(text.contains("Input: ''"));
        assert!(text.contains("Expected match: ''"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_pattern_reports_verdicts() {
        let mut set = ExampleSet::new();
        set.append(Example::new("hello world", "hello"));

        let text = dispatch(&mut set, "test_pattern", &json!({"pattern": "hello"})).unwrap();
        assert!(text.contains("✅ Example 1: PASSED"));
        assert!(text.contains("Summary: 1 passed, 0 failed"));

        let text = dispatch(&mut set, "test_pattern", &json!({"pattern": "hel"})).unwrap();
        assert!(text.contains("❌ Example 1: FAILED"));
        assert!(text.contains("Summary: 0 passed, 1 failed"));
    }

    #[test]
    fn test_pattern_applies_flags() {
        let mut set = ExampleSet::new();
        set.append(Example::new("HELLO world", "HELLO"));

        let text = dispatch(
            &mut set,
            "test_pattern",
            &json!({"pattern": "hello", "flags": "i"}),
        )
        .unwrap();
        assert!(text.contains("Summary: 1 passed, 0 failed"));

        let text = dispatch(&mut set, "test_pattern", &json!({"pattern": "hello"})).unwrap();
        assert!(text.contains("Summary: 0 passed, 1 failed"));
    }

    #[test]
    fn test_pattern_without_examples_is_a_notice() {
        let mut set = ExampleSet::new();
        let text = dispatch(&mut set, "test_pattern", &json!({"pattern": "x"})).unwrap();
        assert!(text.contains("No examples defined"));
    }

    #[test]
    fn test_pattern_compile_failure_is_a_notice() {
        let mut set = ExampleSet::new();
        set.append(Example::new("hello", "hello"));

        let text = dispatch(&mut set, "test_pattern", &json!({"pattern": "[unclosed"})).unwrap();
        assert!(text.contains("invalid pattern"));
        // Store unchanged
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn list_examples_in_insertion_order() {
        let mut set = ExampleSet::new();
        set.append(Example::new("first", "f").with_note("one"));
        set.append(Example::new("second", "s"));

        let text = dispatch(&mut set, "list_examples", &json!({})).unwrap();
        assert!(text.contains("Example 1:"));
        assert!(text.contains("Input: 'first'"));
        assert!(text.contains("Note: one"));
        assert!(text.contains("Example 2:"));
        assert!(text.contains("Total: 2 example(s)"));
        let first = text.find("'first'").unwrap();
        let second = text.find("'second'").unwrap();
        assert!(first < second);
    }

    #[test]
    fn list_examples_empty_notice() {
        let mut set = ExampleSet::new();
        let text = dispatch(&mut set, "list_examples", &json!({})).unwrap();
        assert!(text.contains("No examples defined yet"));
    }

    #[test]
    fn clear_examples_reports_removed_count() {
        let mut set = ExampleSet::new();
        set.append(Example::new("a", "a"));
        set.append(Example::new("b", "b"));

        let text = dispatch(&mut set, "clear_examples", &json!({})).unwrap();
        assert!(text.contains("Removed 2 example(s)"));
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_tool_lists_registered_names() {
        let mut set = ExampleSet::new();
        let err = dispatch(&mut set, "frobnicate", &json!({})).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool { .. }));
        let msg = err.to_string();
        assert!(msg.contains("frobnicate"));
        assert!(msg.contains("add_example"));
        assert!(msg.contains("clear_examples"));
    }

    #[test]
    fn non_string_arguments_are_rejected() {
        let mut set = ExampleSet::new();
        let err = dispatch(&mut set, "add_example", &json!({"input": 42})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(set.is_empty());
    }

    #[test]
    fn definitions_cover_the_fixed_tool_set() {
        let defs = tool_definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names, TOOL_NAMES.to_vec());
    }
}
