//! OpenAPI documentation
//!
//! The document is served at `/openapi.json` and rendered by Swagger UI under
//! `/docs/`.

use utoipa::OpenApi;

use crate::api::error::ErrorResponse;
use crate::api::routes::{chains, contact, diagnostics, health, root, rpc};
use crate::chains::Chain;
use crate::rpc::{RpcRequest, RpcResponse};

/// Generate the OpenAPI documentation for the API
#[derive(OpenApi)]
#[openapi(
    info(title = "FlameWire API", version = "1.0.0"),
    paths(
        root::read_root,
        root::hello,
        health::api_health,
        chains::get_chains,
        rpc::proxy_rpc,
        contact::submit_contact,
        diagnostics::test_database,
    ),
    components(schemas(
        Chain,
        ErrorResponse,
        RpcRequest,
        RpcResponse,
        root::MessageResponse,
        health::HealthResponse,
        chains::ChainsResponse,
        contact::ContactForm,
        contact::ContactReceipt,
        diagnostics::DiagnosticsResponse,
    )),
    tags(
        (name = "general", description = "Greeting endpoints"),
        (name = "health", description = "Service status"),
        (name = "chains", description = "Supported chain registry"),
        (name = "rpc", description = "Mock JSON-RPC proxy"),
        (name = "contact", description = "Contact form"),
        (name = "diagnostics", description = "Database diagnostics"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/hello", "/api/health", "/api/chains", "/api/rpc/{chain}", "/api/contact", "/test"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
