//! Document store module
//!
//! Insert-only persistence keyed by collection name, plus a best-effort
//! collection listing used by diagnostics. The PostgreSQL implementation keeps
//! one table per collection with a `JSONB` document column.

mod postgres_store;

pub use postgres_store::PostgresDocumentStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::shared::validation::COLLECTION_NAME_REGEX;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// Document store port shared by the order service and diagnostics
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into `collection` and return its generated id
    async fn insert_document(&self, collection: &str, document: Value)
        -> Result<String, StoreError>;

    /// List up to `limit` collection names
    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StoreError>;

    /// Release the underlying connections
    async fn close(&self) {}
}

/// Reject collection names that cannot be used as a table identifier
pub fn ensure_valid_collection(collection: &str) -> Result<(), StoreError> {
    if COLLECTION_NAME_REGEX.is_match(collection) {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}
