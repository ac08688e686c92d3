use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::{ensure_valid_collection, DocumentStore, StoreError};

/// PostgreSQL-backed document store
///
/// Each collection is a table of the shape
/// `(id UUID PRIMARY KEY, document JSONB NOT NULL, created_at TIMESTAMPTZ)`,
/// created by the embedded migrations.
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations (creates the collection tables)
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::Unavailable(
                "connection pool is closed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn insert_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        ensure_valid_collection(collection)?;
        self.ensure_open()?;

        let id = Uuid::now_v7();
        // Collection names are validated identifiers, safe to quote into the statement
        let sql = format!(r#"INSERT INTO "{}" (id, document) VALUES ($1, $2)"#, collection);

        sqlx::query(&sql)
            .bind(id)
            .bind(Json(document))
            .execute(&self.pool)
            .await?;

        debug!("Document inserted: collection={}, id={}", collection, id);

        Ok(id.to_string())
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        self.ensure_open()?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::TEXT
            FROM information_schema.tables
            WHERE table_schema = current_schema()
              AND table_type = 'BASE TABLE'
              AND table_name <> '_sqlx_migrations'
            ORDER BY table_name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
