//! In-process document store

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// Documents grouped by collection, held in memory for the process lifetime
pub struct MemoryDocumentStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<(String, Value)>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        if collection.trim().is_empty() {
            return Err(StoreError::InvalidCollection(collection.to_string()));
        }
        let Value::Object(mut fields) = document else {
            return Err(StoreError::InvalidDocument);
        };

        let id = Uuid::new_v4().to_string();
        fields.insert("_id".to_string(), Value::String(id.clone()));

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), Value::Object(fields)));

        Ok(id)
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.collections.read().get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|(doc_id, _)| doc_id == id)
                .map(|(_, doc)| doc.clone())
        }))
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().keys().cloned().collect())
    }
}
