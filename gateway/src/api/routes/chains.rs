//! Chain registry endpoint

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chains::{Chain, SUPPORTED_CHAINS};

/// Chain listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChainsResponse {
    #[schema(value_type = Vec<Chain>)]
    pub chains: &'static [Chain],
}

/// Configure chain routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/api/chains").route(web::get().to(get_chains)));
}

/// List supported chains
#[utoipa::path(
    get,
    path = "/api/chains",
    responses(
        (status = 200, description = "Supported chains", body = ChainsResponse)
    ),
    tag = "chains"
)]
pub async fn get_chains() -> impl Responder {
    HttpResponse::Ok().json(ChainsResponse {
        chains: &SUPPORTED_CHAINS,
    })
}
