//! FlameWire HTTP API
//!
//! This module implements the REST surface of the gateway: informational
//! endpoints, the mock JSON-RPC proxy, the contact form and diagnostics.

mod error;
mod server;
mod state;
pub mod docs;
pub mod middleware;
pub mod routes;

pub use error::{ApiError, ErrorResponse, Result};
pub use server::ApiServer;
pub use state::{GatewayData, GatewayState};

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use tracing::debug;

/// JSON extractor configuration shared by every route.
///
/// Bodies are parsed regardless of content type and payload errors render as
/// 422 with a `detail` message.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            debug!("Rejected body for {}: {}", req.path(), err);
            ApiError::Unprocessable(err.to_string()).into()
        })
}
