use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::features::system::dtos::DiagnosticsResponseDto;
use crate::modules::document_store::DocumentStore;
use crate::shared::constants::{MAX_DIAGNOSTIC_ERROR_CHARS, MAX_LISTED_COLLECTIONS};

// Longer than the pool acquire timeout so connection errors surface first
const LIST_COLLECTIONS_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of probing the document store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreProbe {
    /// No store handle was initialized at startup
    NotInitialized,
    /// Listing succeeded
    Connected { collections: Vec<String> },
    /// A handle exists but listing failed; the message is already truncated
    Failed { error: String },
}

/// Presence of the database settings in the process environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    pub fn from_process_env() -> Self {
        Self {
            database_url: std::env::var_os("DATABASE_URL").is_some(),
            database_name: std::env::var_os("DATABASE_NAME").is_some(),
        }
    }
}

/// Service behind the diagnostics endpoint. Every failure ends up as text in
/// the report, never as an error.
pub struct DiagnosticsService {
    store: Option<Arc<dyn DocumentStore>>,
}

impl DiagnosticsService {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    pub async fn probe(&self) -> StoreProbe {
        let Some(store) = &self.store else {
            return StoreProbe::NotInitialized;
        };

        let listing = tokio::time::timeout(
            LIST_COLLECTIONS_TIMEOUT,
            store.list_collections(MAX_LISTED_COLLECTIONS),
        )
        .await;

        match listing {
            Ok(Ok(mut collections)) => {
                collections.truncate(MAX_LISTED_COLLECTIONS);
                StoreProbe::Connected { collections }
            }
            Ok(Err(e)) => {
                warn!("Diagnostics: listing collections failed: {}", e);
                StoreProbe::Failed {
                    error: truncate_chars(&e.to_string(), MAX_DIAGNOSTIC_ERROR_CHARS),
                }
            }
            Err(_) => {
                warn!("Diagnostics: listing collections timed out");
                StoreProbe::Failed {
                    error: "timed out listing collections".to_string(),
                }
            }
        }
    }

    pub async fn report(&self, env: EnvPresence) -> DiagnosticsResponseDto {
        build_report(self.probe().await, env)
    }
}

pub fn build_report(probe: StoreProbe, env: EnvPresence) -> DiagnosticsResponseDto {
    let (database, connection_status, collections) = match probe {
        StoreProbe::NotInitialized => (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            Vec::new(),
        ),
        StoreProbe::Connected { collections } => (
            "✅ Connected & Working".to_string(),
            "Connected",
            collections,
        ),
        StoreProbe::Failed { error } => (
            format!("⚠️  Connected but Error: {}", error),
            "Connected",
            Vec::new(),
        ),
    };

    DiagnosticsResponseDto {
        backend: "✅ Running".to_string(),
        database,
        database_url: presence_label(env.database_url),
        database_name: presence_label(env.database_name),
        connection_status: connection_status.to_string(),
        collections,
    }
}

fn presence_label(present: bool) -> String {
    let label = if present { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingDocumentStore, MemoryDocumentStore};
    use serde_json::json;

    const NO_ENV: EnvPresence = EnvPresence {
        database_url: false,
        database_name: false,
    };

    #[tokio::test]
    async fn test_probe_without_store() {
        let service = DiagnosticsService::new(None);
        assert_eq!(service.probe().await, StoreProbe::NotInitialized);

        let report = service.report(NO_ENV).await;
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_probe_lists_at_most_ten_collections() {
        let store = Arc::new(MemoryDocumentStore::new());
        for i in 0..12 {
            store
                .insert_document(&format!("collection_{:02}", i), json!({}))
                .await
                .unwrap();
        }

        let service = DiagnosticsService::new(Some(store));
        let report = service
            .report(EnvPresence {
                database_url: true,
                database_name: false,
            })
            .await;

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[0], "collection_00");
    }

    #[tokio::test]
    async fn test_probe_failure_is_truncated_text() {
        let message = "x".repeat(200);
        let service = DiagnosticsService::new(Some(Arc::new(FailingDocumentStore::new(message))));

        let StoreProbe::Failed { error } = service.probe().await else {
            panic!("expected a failed probe");
        };
        assert_eq!(error.chars().count(), MAX_DIAGNOSTIC_ERROR_CHARS);
        assert!(error.starts_with("Document store unavailable: "));

        let report = build_report(StoreProbe::Failed { error }, NO_ENV);
        assert!(report.database.starts_with("⚠️  Connected but Error: "));
        assert_eq!(report.connection_status, "Connected");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("ééééé", 3), "ééé");
        assert_eq!(truncate_chars("short", 50), "short");
    }
}
