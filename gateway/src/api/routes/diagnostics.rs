//! Database diagnostics endpoint
//!
//! `/test` reports whether a document store is configured and reachable. The
//! status strings are consumed by existing dashboards and must stay stable.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::GatewayData;
use crate::storage::StoreStatus;

/// Maximum number of collection names listed
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Error messages are cut to this many characters
const ERROR_PREVIEW_CHARS: usize = 50;

/// Diagnostics response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Configure diagnostics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/test").route(web::get().to(test_database)));
}

/// Check whether the document store is available and accessible
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsResponse)
    ),
    tag = "diagnostics"
)]
pub async fn test_database(state: GatewayData) -> impl Responder {
    let database_config = &state.config().database;

    let mut report = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: String::new(),
        database_url: set_marker(database_config.url().is_some()),
        database_name: set_marker(database_config.name().is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store_status() {
        StoreStatus::Disabled => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        StoreStatus::Failed(e) => {
            report.database = format!("❌ Error: {}", preview(&e.to_string()));
        }
        StoreStatus::Ready(store) => {
            report.connection_status = "Connected".to_string();
            match store.collection_names() {
                Ok(names) => {
                    report.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    report.database = format!("⚠️  Connected but Error: {}", preview(&e.to_string()));
                }
            }
        }
    }

    debug!("Diagnostics: database={}", report.database);
    HttpResponse::Ok().json(report)
}

fn set_marker(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn preview(message: &str) -> String {
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GatewayState;
    use crate::config::GatewayConfig;
    use crate::storage::{DocumentStore, MemoryDocumentStore, StoreError};
    use actix_web::{
        test::{call_service, init_service, read_body_json, TestRequest},
        App,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn diagnostics(state: GatewayState) -> Value {
        let app = init_service(App::new().app_data(state.into_data()).configure(configure)).await;
        let resp = call_service(&app, TestRequest::get().uri("/test").to_request()).await;
        assert!(resp.status().is_success());
        read_body_json(resp).await
    }

    #[actix_web::test]
    async fn test_without_database() {
        let body = diagnostics(GatewayState::new(GatewayConfig::default())).await;
        assert_eq!(
            body,
            json!({
                "backend": "✅ Running",
                "database": "⚠️  Available but not initialized",
                "database_url": "❌ Not Set",
                "database_name": "❌ Not Set",
                "connection_status": "Not Connected",
                "collections": []
            })
        );
    }

    #[actix_web::test]
    async fn test_empty_settings_reported_as_not_set() {
        let mut config = GatewayConfig::default();
        config.database.url = Some(String::new());
        config.database.name = Some(String::new());
        let body = diagnostics(GatewayState::new(config)).await;

        assert_eq!(body["database"], "⚠️  Available but not initialized");
        assert_eq!(body["database_url"], "❌ Not Set");
        assert_eq!(body["database_name"], "❌ Not Set");
        assert_eq!(body["connection_status"], "Not Connected");
    }

    #[actix_web::test]
    async fn test_with_failed_database() {
        let mut config = GatewayConfig::default();
        config.database.url = Some("postgres://db.internal:5432/flamewire".to_string());
        let body = diagnostics(GatewayState::new(config)).await;

        assert_eq!(body["database"], "❌ Error: Unsupported database backend: postgres");
        assert_eq!(body["database_url"], "✅ Set");
        assert_eq!(body["connection_status"], "Not Connected");
    }

    #[actix_web::test]
    async fn test_with_working_database() {
        let store = Arc::new(MemoryDocumentStore::new("flamewire"));
        for i in 0..12 {
            store.insert(&format!("collection_{i:02}"), json!({})).unwrap();
        }

        let mut config = GatewayConfig::default();
        config.database.name = Some("flamewire".to_string());
        let body = diagnostics(GatewayState::with_store(config, StoreStatus::Ready(store))).await;

        assert_eq!(body["database"], "✅ Connected & Working");
        assert_eq!(body["database_name"], "✅ Set");
        assert_eq!(body["connection_status"], "Connected");
        assert_eq!(body["collections"].as_array().map(Vec::len), Some(MAX_LISTED_COLLECTIONS));
        assert_eq!(body["collections"][0], "collection_00");
    }

    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        fn name(&self) -> &str {
            "broken"
        }

        fn insert(&self, _collection: &str, _document: Value) -> Result<String, StoreError> {
            Err(StoreError::InvalidDocument)
        }

        fn get(&self, _collection: &str, _id: &str) -> Result<Option<Value>, StoreError> {
            Ok(None)
        }

        fn collection_names(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::InvalidCollection("x".repeat(80)))
        }
    }

    #[actix_web::test]
    async fn test_with_listing_error() {
        let state = GatewayState::with_store(
            GatewayConfig::default(),
            StoreStatus::Ready(Arc::new(BrokenStore)),
        );
        let body = diagnostics(state).await;

        let database = body["database"].as_str().expect("string");
        assert!(database.starts_with("⚠️  Connected but Error: Invalid collection name"));
        let detail = database.trim_start_matches("⚠️  Connected but Error: ");
        assert_eq!(detail.chars().count(), 50);
        assert_eq!(body["collections"], json!([]));
    }
}
