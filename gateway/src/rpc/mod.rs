//! Mock JSON-RPC proxy
//!
//! Validates the target chain and answers the call from a static table of
//! canned results. No request ever leaves the process.

mod handlers;
mod types;

use thiserror::Error;

pub use handlers::{dispatch, MOCK_NOTE};
pub use types::{RpcRequest, RpcResponse, DEFAULT_REQUEST_ID, JSONRPC_VERSION};

/// Dispatch failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The chain code is not in the registry
    #[error("Unsupported chain")]
    UnsupportedChain(String),
}
