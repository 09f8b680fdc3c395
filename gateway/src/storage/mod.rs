//! Document storage
//!
//! Optional backing store for submitted forms. The gateway runs fine without
//! one; endpoints that would write to it report `stored: false` instead.
//!
//! `sled://<path>` opens a persistent database on disk, `memory://<name>` an
//! in-process one that is gone on restart.

mod database;
mod memory;

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

pub use database::SledDocumentStore;
pub use memory::MemoryDocumentStore;

/// URL scheme selecting the in-process store
pub const MEMORY_SCHEME: &str = "memory";

/// URL scheme selecting the on-disk sled store
pub const SLED_SCHEME: &str = "sled";

/// Database name used when neither the config nor the URL provides one
pub const DEFAULT_DATABASE_NAME: &str = "flamewire";

/// Storage error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),

    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),

    #[error("Document must be a JSON object")]
    InvalidDocument,

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// A collection-oriented document store
pub trait DocumentStore: Send + Sync {
    /// Database name
    fn name(&self) -> &str;

    /// Insert `document` into `collection`, returning the new document id
    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Fetch a document by id
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Names of all collections holding at least one document
    fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Outcome of opening the configured store
#[derive(Clone)]
pub enum StoreStatus {
    /// No database URL configured
    Disabled,
    /// A URL was configured but the store could not be opened
    Failed(StoreError),
    /// Store is open
    Ready(Arc<dyn DocumentStore>),
}

impl StoreStatus {
    /// The open store, if any
    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            StoreStatus::Ready(store) => Some(store),
            _ => None,
        }
    }
}

impl std::fmt::Debug for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreStatus::Disabled => write!(f, "Disabled"),
            StoreStatus::Failed(e) => write!(f, "Failed({})", e),
            StoreStatus::Ready(store) => write!(f, "Ready({})", store.name()),
        }
    }
}

/// Open the store described by `config`
pub fn connect(config: &DatabaseConfig) -> StoreStatus {
    let Some(url) = config.url() else {
        info!("No database configured, contact submissions will not be stored");
        return StoreStatus::Disabled;
    };

    match open(url, config.name()) {
        Ok(store) => {
            info!("Document store '{}' ready", store.name());
            StoreStatus::Ready(store)
        }
        Err(e) => {
            warn!("Failed to open document store: {}", e);
            StoreStatus::Failed(e)
        }
    }
}

fn open(url: &str, name: Option<&str>) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let (scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| StoreError::InvalidUrl(url.to_string()))?;

    let name = name
        .or_else(|| rest.trim_end_matches('/').rsplit('/').next().filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_DATABASE_NAME);

    match scheme {
        MEMORY_SCHEME => Ok(Arc::new(MemoryDocumentStore::new(name))),
        SLED_SCHEME => {
            if rest.is_empty() {
                return Err(StoreError::InvalidUrl(url.to_string()));
            }
            let store = SledDocumentStore::open(rest, name)?;
            info!("Opened sled database at {}", store.path().display());
            Ok(Arc::new(store))
        }
        other => Err(StoreError::UnsupportedBackend(other.to_string())),
    }
}
