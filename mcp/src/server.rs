//! `LabServer` — JSON-RPC method dispatch over the example-validation tools.
//!
//! The server owns the [`ExampleSet`] for its whole lifetime (created empty,
//! discarded at process end) and handles one request at a time. Methods:
//!
//! - `initialize` — protocol handshake
//! - `notifications/*` — accepted, never answered
//! - `ping` — liveness check
//! - `tools/list` — advertise the four tool definitions
//! - `tools/call` — dispatch by tool name, respond with one text content
//!
//! Tool-level outcomes (pass/fail reports, compile-error notices, empty-set
//! notices) are success responses carrying text. Only protocol mismatches
//! become JSON-RPC errors.

use crate::protocol::{Request, Response, RpcError};
use crate::tools;
use rxlab::ExampleSet;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// MCP protocol revision this server implements.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Stateful request handler: the example set plus method dispatch.
#[derive(Debug, Default)]
pub struct LabServer {
    examples: ExampleSet,
}

impl LabServer {
    /// Create a server with an empty example set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the stored examples.
    #[must_use]
    pub fn examples(&self) -> &ExampleSet {
        &self.examples
    }

    /// Handle one raw input line: parse, dispatch, serialize.
    ///
    /// Returns `None` for notifications (no response is written) and
    /// blank lines. Parse failures produce an error response with a null
    /// id, since the request id could not be recovered.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request)?,
            Err(e) => {
                warn!(error = %e, "discarding unparseable request");
                Response::failure(Value::Null, RpcError::parse_error(e))
            }
        };

        // Response serialization cannot fail: the types contain no maps
        // with non-string keys
        Some(serde_json::to_string(&response).unwrap_or_default())
    }

    /// Handle one parsed request. `None` means "do not respond".
    pub fn handle(&mut self, request: Request) -> Option<Response> {
        debug!(method = %request.method, "handling request");

        if request.is_notification() {
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => Response::success(id, self.initialize_result()),
            "ping" => Response::success(id, json!({})),
            "tools/list" => Response::success(id, json!({ "tools": tools::tool_definitions() })),
            "tools/call" => self.tools_call(id, &request.params),
            other => Response::failure(id, RpcError::method_not_found(other)),
        };
        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": "rxlab-mcp",
                "version": env!("CARGO_PKG_VERSION"),
            },
        })
    }

    fn tools_call(&mut self, id: Value, params: &Value) -> Response {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Response::failure(
                id,
                RpcError::invalid_params("tools/call requires a \"name\" parameter"),
            );
        };
        let arguments = params.get("arguments").unwrap_or(&Value::Null);

        match tools::dispatch(&mut self.examples, name, arguments) {
            Ok(text) => Response::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "isError": false,
                }),
            ),
            Err(e) => {
                warn!(tool = name, error = %e, "tool call rejected");
                Response::failure(id, RpcError::invalid_params(e))
            }
        }
    }
}
