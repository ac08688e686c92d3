use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use crate::core::app::build_router;
use crate::core::config::{AppConfig, SwaggerConfig};
use crate::modules::document_store::{ensure_valid_collection, DocumentStore, StoreError};
use crate::modules::uploads::LocalUploadStorage;

#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub collection: String,
    pub id: String,
    pub document: Value,
}

/// In-memory document store used by handler and service tests
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<Vec<StoredDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        ensure_valid_collection(collection)?;

        let id = Uuid::now_v7().to_string();
        self.documents.lock().unwrap().push(StoredDocument {
            collection: collection.to_string(),
            id: id.clone(),
            document,
        });
        Ok(id)
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let names: BTreeSet<String> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.collection.clone())
            .collect();
        Ok(names.into_iter().take(limit).collect())
    }
}

/// Document store whose every operation fails, simulating an unreachable database
pub struct FailingDocumentStore {
    message: String,
}

impl FailingDocumentStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn insert_document(
        &self,
        _collection: &str,
        _document: Value,
    ) -> Result<String, StoreError> {
        Err(StoreError::Unavailable(self.message.clone()))
    }

    async fn list_collections(&self, _limit: usize) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable(self.message.clone()))
    }
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 1024 * 1024,
    }
}

pub fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        username: None,
        password: None,
        title: "Order Intake API".to_string(),
        version: "0.1.0".to_string(),
        description: "test".to_string(),
    }
}

/// Build a test server around the full application router
pub fn test_server(store: Option<Arc<dyn DocumentStore>>, upload_dir: &Path) -> TestServer {
    let uploads = Arc::new(LocalUploadStorage::new(upload_dir));
    let router = build_router(store, uploads, &test_app_config(), &test_swagger_config());
    TestServer::new(router).unwrap()
}
