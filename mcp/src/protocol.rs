//! JSON-RPC 2.0 message types for the stdio transport.
//!
//! Only the subset needed for an MCP tool server: requests (with
//! notifications distinguished by an absent `id`), success/error responses,
//! and the standard error codes. Message framing is one JSON object per
//! line.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The only protocol version this server speaks.
pub const JSONRPC_VERSION: &str = "2.0";

/// An incoming JSON-RPC request or notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Protocol version marker; expected to be `"2.0"`.
    #[serde(default)]
    pub jsonrpc: String,
    /// Request id. Absent for notifications, which get no response.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name, e.g. `tools/call`.
    pub method: String,
    /// Method parameters; defaults to null when omitted.
    #[serde(default)]
    pub params: Value,
}

impl Request {
    /// Notifications carry no id and must not be answered.
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An outgoing JSON-RPC response: exactly one of `result` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    /// Build a success response.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    #[must_use]
    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i64 = -32700;
    /// The JSON was valid but not a well-formed request.
    pub const INVALID_REQUEST: i64 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid method parameters (also used for unknown tool names).
    pub const INVALID_PARAMS: i64 = -32602;

    /// Build a parse error.
    #[must_use]
    pub fn parse_error(detail: impl fmt::Display) -> Self {
        Self {
            code: Self::PARSE_ERROR,
            message: format!("parse error: {detail}"),
        }
    }

    /// Build a method-not-found error.
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: Self::METHOD_NOT_FOUND,
            message: format!("method not found: \"{method}\""),
        }
    }

    /// Build an invalid-params error.
    #[must_use]
    pub fn invalid_params(detail: impl fmt::Display) -> Self {
        Self {
            code: Self::INVALID_PARAMS,
            message: detail.to_string(),
        }
    }
}
