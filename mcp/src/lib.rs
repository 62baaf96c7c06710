//! rxlab-mcp: MCP stdio server for the rxlab example-validation engine
//!
//! Exposes the engine as four MCP tools over JSON-RPC 2.0 on stdio
//! (one JSON object per line; stdout carries the protocol, stderr the logs):
//!
//! - `add_example` — append a labeled example (input + expected match + note)
//! - `test_pattern` — evaluate a candidate pattern against every example
//! - `list_examples` — list stored examples in insertion order
//! - `clear_examples` — remove all examples
//!
//! # Architecture
//!
//! ```text
//! stdin line ──> protocol::Request ──> LabServer::handle ──> tools::dispatch
//!                                            │                     │
//! stdout line <── protocol::Response <───────┴── rxlab (ExampleSet, PatternSpec)
//! ```
//!
//! The server is synchronous and single-threaded: each request runs to
//! completion before the next is read, so the [`rxlab::ExampleSet`] needs no
//! locking. All tool responses are single text payloads; the only hard
//! failures surfaced as JSON-RPC errors are protocol-level ones (parse
//! failures, unknown methods, unknown tool names).

pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::{Request, Response, RpcError};
pub use server::LabServer;
pub use tools::{dispatch, tool_definitions, ToolError};
