use std::sync::Arc;

use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::custom_orders::dtos::{CustomOrderResponseDto, NewCustomOrder};
use crate::features::custom_orders::models::{CustomOrder, UploadedFileInfo};
use crate::modules::document_store::DocumentStore;
use crate::modules::uploads::LocalUploadStorage;
use crate::shared::constants::CUSTOM_ORDER_COLLECTION;
use crate::shared::validation::validate_upload_file_name;

/// Service for recording custom order submissions
pub struct CustomOrderService {
    store: Option<Arc<dyn DocumentStore>>,
    uploads: Arc<LocalUploadStorage>,
}

impl CustomOrderService {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, uploads: Arc<LocalUploadStorage>) -> Self {
        Self { store, uploads }
    }

    /// Persist the attachment (if any) and insert the order metadata.
    ///
    /// The file is written before the record is inserted. If the insert
    /// fails, the written file stays on disk.
    pub async fn submit(&self, order: NewCustomOrder) -> Result<CustomOrderResponseDto> {
        let store = self.store.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("Database is not initialized".to_string())
        })?;

        if let Some(file) = &order.file {
            validate_upload_file_name(&file.file_name).map_err(AppError::Validation)?;
        }

        self.uploads.ensure_dir().await?;

        let mut saved_file_path = None;
        let mut file_info = None;

        if let Some(file) = order.file {
            let path = self.uploads.save(&file.file_name, &file.data).await?;
            saved_file_path = Some(path.to_string_lossy().into_owned());
            file_info = Some(UploadedFileInfo {
                file_name: file.file_name,
                file_type: file.content_type,
                file_size: file.data.len() as u64,
            });
        }

        let record = CustomOrder {
            name: order.name,
            email: order.email,
            description: order.description,
            file: file_info,
        };

        let document = serde_json::to_value(&record)
            .map_err(|e| AppError::Internal(format!("Failed to serialize order: {}", e)))?;

        let id = match store
            .insert_document(CUSTOM_ORDER_COLLECTION, document)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                if let Some(path) = &saved_file_path {
                    warn!("Order insert failed, upload left on disk: path={}", path);
                }
                return Err(e.into());
            }
        };

        info!(
            "Custom order recorded: id={}, file_size={:?}",
            id,
            record.file.as_ref().map(|f| f.file_size)
        );

        Ok(CustomOrderResponseDto::success(id, saved_file_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::custom_orders::dtos::UploadedFile;
    use crate::shared::test_helpers::{FailingDocumentStore, MemoryDocumentStore};

    fn order_with_file(file_name: &str, data: &[u8]) -> NewCustomOrder {
        NewCustomOrder {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            description: Some("Two mugs".to_string()),
            file: Some(UploadedFile {
                file_name: file_name.to_string(),
                content_type: "text/plain".to_string(),
                data: data.to_vec(),
            }),
        }
    }

    #[tokio::test]
    async fn test_submit_records_file_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(MemoryDocumentStore::new());
        let service = CustomOrderService::new(
            Some(store.clone()),
            Arc::new(LocalUploadStorage::new(tmp.path().join("uploads"))),
        );

        let response = service
            .submit(order_with_file("notes.txt", b"hello order"))
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        let saved = response.saved_file_path.unwrap();
        assert_eq!(std::fs::read(&saved).unwrap(), b"hello order");

        let docs = store.documents(CUSTOM_ORDER_COLLECTION);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, response.id);
        assert_eq!(docs[0].document["file_name"], "notes.txt");
        assert_eq!(docs[0].document["file_type"], "text/plain");
        assert_eq!(docs[0].document["file_size"], 11);
        assert_eq!(docs[0].document["description"], "Two mugs");
    }

    #[tokio::test]
    async fn test_submit_without_store_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let upload_dir = tmp.path().join("uploads");
        let service =
            CustomOrderService::new(None, Arc::new(LocalUploadStorage::new(&upload_dir)));

        let err = service
            .submit(order_with_file("notes.txt", b"data"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ServiceUnavailable(_)));
        assert!(!upload_dir.exists());
    }

    #[tokio::test]
    async fn test_submit_rejects_traversal_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(MemoryDocumentStore::new());
        let service = CustomOrderService::new(
            Some(store.clone()),
            Arc::new(LocalUploadStorage::new(tmp.path().join("uploads"))),
        );

        let err = service
            .submit(order_with_file("../escape.txt", b"data"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!tmp.path().join("escape.txt").exists());
        assert!(store.documents(CUSTOM_ORDER_COLLECTION).is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_leaves_file_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let upload_dir = tmp.path().join("uploads");
        let service = CustomOrderService::new(
            Some(Arc::new(FailingDocumentStore::new("connection refused"))),
            Arc::new(LocalUploadStorage::new(&upload_dir)),
        );

        let err = service
            .submit(order_with_file("orphan.txt", b"data"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(std::fs::read(upload_dir.join("orphan.txt")).unwrap(), b"data");
    }
}
