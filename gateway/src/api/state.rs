//! Shared handler state

use actix_web::web;
use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::storage::{self, DocumentStore, StoreStatus};

/// Everything a request handler may read. Immutable after startup.
#[derive(Debug, Clone)]
pub struct GatewayState {
    config: GatewayConfig,
    store: StoreStatus,
}

/// Type alias for the state passed to route handlers
pub type GatewayData = web::Data<Arc<GatewayState>>;

impl GatewayState {
    /// Build state from configuration, opening the document store if one is configured
    pub fn new(config: GatewayConfig) -> Self {
        let store = storage::connect(&config.database);
        Self { config, store }
    }

    /// Build state with an explicit store status
    pub fn with_store(config: GatewayConfig, store: StoreStatus) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn store_status(&self) -> &StoreStatus {
        &self.store
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        self.store.store()
    }

    /// Wrap for registration with `App::app_data`
    pub fn into_data(self) -> GatewayData {
        web::Data::new(Arc::new(self))
    }
}
