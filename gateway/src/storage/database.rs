//! Persistent document store backed by sled
//!
//! Each collection is a sled tree keyed by document id. Values are the JSON
//! encoding of the document, `_id` included.

use serde_json::Value;
use sled::Db;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// sled keeps its own bookkeeping in this tree
const DEFAULT_TREE: &[u8] = b"__sled__default";

/// Flush interval handed to sled's background flusher
const FLUSH_EVERY_MS: u64 = 1000;

pub struct SledDocumentStore {
    name: String,
    path: PathBuf,
    db: Db,
}

impl SledDocumentStore {
    /// Open (or create) the database at `path`
    pub fn open<P: AsRef<Path>>(path: P, name: impl Into<String>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let db = sled::Config::new()
            .path(&path)
            .flush_every_ms(Some(FLUSH_EVERY_MS))
            .open()
            .map_err(database_error)?;

        Ok(Self {
            name: name.into(),
            path,
            db,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn has_collection(&self, collection: &str) -> bool {
        self.db
            .tree_names()
            .iter()
            .any(|name| &name[..] == collection.as_bytes())
    }
}

impl DocumentStore for SledDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        if collection.trim().is_empty() || collection.as_bytes() == DEFAULT_TREE {
            return Err(StoreError::InvalidCollection(collection.to_string()));
        }
        let Value::Object(mut fields) = document else {
            return Err(StoreError::InvalidDocument);
        };

        let id = Uuid::new_v4().to_string();
        fields.insert("_id".to_string(), Value::String(id.clone()));
        let bytes = serde_json::to_vec(&Value::Object(fields))
            .map_err(|e| StoreError::CorruptDocument(e.to_string()))?;

        let tree = self.db.open_tree(collection).map_err(database_error)?;
        tree.insert(id.as_bytes(), bytes).map_err(database_error)?;
        tree.flush().map_err(database_error)?;

        Ok(id)
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        if !self.has_collection(collection) {
            return Ok(None);
        }

        let tree = self.db.open_tree(collection).map_err(database_error)?;
        match tree.get(id.as_bytes()).map_err(database_error)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| StoreError::CorruptDocument(e.to_string())),
            None => Ok(None),
        }
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for raw in self.db.tree_names() {
            if &raw[..] == DEFAULT_TREE {
                continue;
            }
            let tree = self.db.open_tree(&raw).map_err(database_error)?;
            if tree.is_empty() {
                continue;
            }
            names.push(String::from_utf8_lossy(&raw).into_owned());
        }
        names.sort();
        Ok(names)
    }
}

fn database_error(err: sled::Error) -> StoreError {
    StoreError::Database(err.to_string())
}
