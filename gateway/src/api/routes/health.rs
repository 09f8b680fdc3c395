//! Service health endpoint
//!
//! `/api/health` reports a static status together with the chain registry and
//! the deployment region. It never touches the document store, so it stays
//! cheap enough for load balancer probes.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::GatewayData;
use crate::chains::{Chain, SUPPORTED_CHAINS};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "flamewire";

/// Health response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server answers
    pub status: &'static str,
    pub service: &'static str,
    /// Milliseconds spent building this response
    pub latency_ms: u64,
    #[schema(value_type = Vec<Chain>)]
    pub chains: &'static [Chain],
    pub region: String,
    pub version: &'static str,
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/api/health").route(web::get().to(api_health)));
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn api_health(state: GatewayData) -> impl Responder {
    let started = Instant::now();
    let chains: &'static [Chain] = &SUPPORTED_CHAINS;
    let latency_ms = started.elapsed().as_millis() as u64;

    debug!("Health probe: OK");

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        latency_ms,
        chains,
        region: state.config().server.region.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GatewayState;
    use crate::config::GatewayConfig;
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body_json, TestRequest},
        App,
    };
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_reports_region_and_chains() {
        let mut config = GatewayConfig::default();
        config.server.region = "us-east".to_string();
        let state = GatewayState::new(config).into_data();

        let app = init_service(App::new().app_data(state).configure(configure)).await;
        let resp = call_service(&app, TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "flamewire");
        assert_eq!(body["region"], "us-east");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["chains"].as_array().map(Vec::len), Some(5));
        assert!(body["latency_ms"].is_u64());
    }

    #[test]
    fn test_health_field_order() {
        let response = HealthResponse {
            status: "ok",
            service: SERVICE_NAME,
            latency_ms: 0,
            chains: &SUPPORTED_CHAINS[..1],
            region: "global".to_string(),
            version: "1.0.0",
        };

        let json = serde_json::to_string(&response).expect("Should serialize");
        assert_eq!(
            json,
            r#"{"status":"ok","service":"flamewire","latency_ms":0,"chains":[{"name":"Ethereum","code":"eth"}],"region":"global","version":"1.0.0"}"#
        );
    }
}
