//! JSON-RPC types
//!
//! This module defines the data structures for JSON-RPC 2.0 requests and responses
//! as accepted by the chain proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// JSON-RPC protocol version emitted on every response
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id used when the caller omits one or sends `null`
pub const DEFAULT_REQUEST_ID: u64 = 1;

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RpcRequest {
    /// JSON-RPC version. Accepted as sent, never validated
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Positional parameters
    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub params: Option<Vec<Value>>,
    /// Request ID. `None` when omitted or `null`
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub id: Option<Value>,
}

impl RpcRequest {
    /// Build a request for `method` with no params and no id
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_jsonrpc(),
            method: method.into(),
            params: None,
            id: None,
        }
    }

    /// Attach positional params
    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// Attach a request id
    pub fn with_id(mut self, id: Value) -> Self {
        self.id = Some(id);
        self
    }

    /// The id to echo back: the request id, or `1` when absent or null
    pub fn response_id(&self) -> Value {
        match &self.id {
            Some(id) if !id.is_null() => id.clone(),
            _ => Value::from(DEFAULT_REQUEST_ID),
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RpcResponse {
    /// JSON-RPC version, always "2.0"
    pub jsonrpc: String,
    /// Request ID, matches the ID from the request
    #[schema(value_type = Object)]
    pub id: Value,
    /// Method result
    #[schema(value_type = Object)]
    pub result: Value,
}

impl RpcResponse {
    /// Create a successful response with a result
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

/// The request as reflected back when no canned result exists
#[derive(Debug, Clone, Serialize)]
pub struct EchoedCall<'a> {
    pub chain: &'a str,
    pub method: &'a str,
    pub params: &'a [Value],
}

/// Fallback result body for methods without a canned result
#[derive(Debug, Clone, Serialize)]
pub struct EchoFallback<'a> {
    pub echo: EchoedCall<'a>,
    pub note: &'static str,
}
