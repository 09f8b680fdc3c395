//! API server implementation
//!
//! This module implements the HTTP server for the gateway,
//! handling middleware, routing and startup.

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::middleware::ApiLogger;
use super::routes;
use super::state::GatewayState;
use crate::config::ServerConfig;

/// API server
pub struct ApiServer {
    state: Arc<GatewayState>,
}

impl ApiServer {
    /// Create a new API server instance
    pub fn new(state: GatewayState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let server = &self.state.config().server;
        let ip: IpAddr = server.bind_address.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address '{}': {e}", server.bind_address),
            )
        })?;
        Ok(SocketAddr::new(ip, server.port))
    }

    /// Start the API server
    pub fn start(self) -> std::io::Result<Server> {
        let socket_addr = self.socket_addr()?;
        let config = self.state.config().server.clone();
        let state = web::Data::new(self.state);

        info!(
            "Starting API server on {} (region {}, store {:?})",
            socket_addr,
            config.region,
            state.store_status()
        );

        let cors_config = config.clone();
        let mut server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(super::json_config(cors_config.max_json_payload_size))
                .wrap(middleware::DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
                .wrap(cors(&cors_config))
                .wrap(ApiLogger::new())
                .configure(routes::configure)
                .default_service(web::to(routes::not_found))
        })
        .client_request_timeout(Duration::from_secs(config.request_timeout));

        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }

        let server = server.bind(socket_addr)?.run();
        info!("API server started on {}", socket_addr);

        Ok(server)
    }
}

/// CORS policy. A `*` entry allows any origin.
pub fn cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);

    if config.cors_allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        config
            .cors_allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
