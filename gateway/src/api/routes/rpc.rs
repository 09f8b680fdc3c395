//! JSON-RPC proxy endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, warn};

use crate::api::middleware::logging::get_request_id;
use crate::api::{ApiError, Result};
use crate::rpc::{self, RpcRequest};

/// Configure RPC proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/api/rpc/{chain}").route(web::post().to(proxy_rpc)));
}

/// Proxy a JSON-RPC call to a chain
///
/// Known `(chain, method)` pairs return a canned result; every other method on
/// a supported chain is echoed back. Unknown chains return 404.
#[utoipa::path(
    post,
    path = "/api/rpc/{chain}",
    params(
        ("chain" = String, Path, description = "Chain code, e.g., eth, bittensor, sui")
    ),
    request_body = RpcRequest,
    responses(
        (status = 200, description = "RPC result", body = crate::rpc::RpcResponse),
        (status = 404, description = "Unsupported chain", body = crate::api::ErrorResponse),
        (status = 422, description = "Malformed request body", body = crate::api::ErrorResponse)
    ),
    tag = "rpc"
)]
pub async fn proxy_rpc(
    req: HttpRequest,
    chain: web::Path<String>,
    request: web::Json<RpcRequest>,
) -> Result<HttpResponse> {
    let chain = chain.into_inner();
    let request = request.into_inner();
    let method = request.method.clone();

    let response = rpc::dispatch(&chain, request).map_err(|e| {
        warn!(
            "Request {} - rejected rpc call {} for chain '{}': {}",
            get_request_id(&req).unwrap_or_default(),
            method,
            chain,
            e
        );
        ApiError::from(e)
    })?;

    debug!("rpc {} on {} -> id {}", method, chain, response.id);
    Ok(HttpResponse::Ok().json(response))
}
