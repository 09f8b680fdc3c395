//! API routes
//!
//! This module defines the HTTP routes exposed by the gateway.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::error::ApiError;

pub mod chains;
pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod root;
pub mod rpc;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Greeting routes
        .configure(root::configure)
        // Service status
        .configure(health::configure)
        // Chain registry
        .configure(chains::configure)
        // JSON-RPC proxy
        .configure(rpc::configure)
        // Contact form
        .configure(contact::configure)
        // Database diagnostics
        .configure(diagnostics::configure)
        // OpenAPI document and interactive docs
        .service(web::redirect("/docs", "/docs/"))
        .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()));
}

/// A resource at `path` that answers unsupported methods with 405
pub fn resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

/// Fallback for requests no route matched
pub async fn not_found() -> super::Result<HttpResponse> {
    Err(ApiError::RouteNotFound)
}

/// Fallback for a known path called with the wrong method
pub async fn method_not_allowed() -> super::Result<HttpResponse> {
    Err(ApiError::MethodNotAllowed)
}
