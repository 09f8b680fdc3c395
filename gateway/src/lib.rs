//! FlameWire gateway
//!
//! An HTTP gateway exposing a static chain registry, informational endpoints
//! and a mock JSON-RPC proxy that answers from canned data.

pub mod api;
pub mod chains;
pub mod config;
pub mod logging;
pub mod rpc;
pub mod storage;

pub use crate::api::{ApiServer, GatewayState};
pub use crate::chains::{Chain, SUPPORTED_CHAINS};
pub use crate::config::GatewayConfig;
pub use crate::rpc::{dispatch, DispatchError, RpcRequest, RpcResponse};
