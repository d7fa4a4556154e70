//! In-memory implementation of the store contracts.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    config::SupportConfig,
    document::{Document, MAX_DOCUMENTS, MAX_FILE_BYTES, NewDocument},
    errors::{Result, StoreError},
    store::{ConfigStore, DocumentStore},
};

/// In-memory store backing both the document and configuration contracts.
///
/// Reads clone value snapshots out of the lock and may run concurrently;
/// writes take the write guard, so each record has a single writer at a
/// time. New documents are inserted at the head, which keeps `list()`
/// newest-first even when upload timestamps collide.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
    config: RwLock<Option<SupportConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    async fn add(&self, new: NewDocument) -> Result<Document> {
        if new.size_bytes > MAX_FILE_BYTES {
            warn!(name = %new.name, size = new.size_bytes, "rejecting oversize upload");
            return Err(StoreError::FileTooLarge {
                got: new.size_bytes,
                max: MAX_FILE_BYTES,
            });
        }

        let decoded = BASE64
            .decode(new.content.as_bytes())
            .map_err(|e| StoreError::InvalidContent(e.to_string()))?;
        if decoded.len() as u64 != new.size_bytes {
            warn!(
                name = %new.name,
                declared = new.size_bytes,
                decoded = decoded.len(),
                "rejecting upload with mismatched content size"
            );
            return Err(StoreError::ContentSizeMismatch {
                declared: new.size_bytes,
                decoded: decoded.len() as u64,
            });
        }

        let mut documents = self.documents.write().await;
        if documents.len() >= MAX_DOCUMENTS {
            warn!(count = documents.len(), "rejecting upload: document limit reached");
            return Err(StoreError::CapacityExceeded { max: MAX_DOCUMENTS });
        }

        let document = Document {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            mime_type: new.mime_type,
            content: new.content,
            size_bytes: new.size_bytes,
            uploaded_at: Utc::now(),
        };
        documents.insert(0, document.clone());
        info!(id = %document.id, name = %document.name, count = documents.len(), "document stored");
        Ok(document)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        if documents.len() == before {
            debug!(%id, "remove: no such document");
            return Err(StoreError::NotFound(id.to_string()));
        }
        info!(%id, "document removed");
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get_config(&self) -> SupportConfig {
        if let Some(config) = self.config.read().await.clone() {
            return config;
        }
        // First access: materialize and persist the defaults.
        let mut slot = self.config.write().await;
        slot.get_or_insert_with(SupportConfig::default).clone()
    }

    async fn set_config(&self, config: SupportConfig) -> SupportConfig {
        let mut slot = self.config.write().await;
        *slot = Some(config.clone());
        info!(name = %config.assistant_name, "configuration saved");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_doc(name: &str) -> NewDocument {
        NewDocument {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            content: BASE64.encode(b"x"),
            size_bytes: 1,
        }
    }

    #[tokio::test]
    async fn add_assigns_id_and_is_listed() {
        let store = MemoryStore::new();
        let doc = store.add(small_doc("a.txt")).await.unwrap();
        assert!(!doc.id.is_empty());

        let listed = store.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, doc.id);
        assert_eq!(listed[0].name, "a.txt");
    }

    #[tokio::test]
    async fn list_is_newest_first_and_idempotent() {
        let store = MemoryStore::new();
        store.add(small_doc("first.txt")).await.unwrap();
        store.add(small_doc("second.txt")).await.unwrap();

        let listed = store.list().await;
        assert_eq!(listed[0].name, "second.txt");
        assert_eq!(listed[1].name, "first.txt");

        // No intervening writes: identical sequence.
        assert_eq!(store.list().await, listed);
    }

    #[tokio::test]
    async fn add_rejects_oversize_file() {
        let store = MemoryStore::new();
        let mut doc = small_doc("huge.bin");
        doc.size_bytes = MAX_FILE_BYTES + 1;

        let err = store.add(doc).await.unwrap_err();
        assert!(matches!(err, StoreError::FileTooLarge { .. }));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn add_rejects_invalid_base64() {
        let store = MemoryStore::new();
        let mut doc = small_doc("bad.bin");
        doc.content = "not base64!!!".to_string();

        let err = store.add(doc).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidContent(_)));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn add_rejects_content_size_mismatch() {
        let store = MemoryStore::new();
        let mut doc = small_doc("short.bin");
        doc.size_bytes = 2;

        let err = store.add(doc).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::ContentSizeMismatch {
                declared: 2,
                decoded: 1
            }
        );
    }

    #[tokio::test]
    async fn add_rejects_when_at_capacity() {
        let store = MemoryStore::new();
        for i in 0..MAX_DOCUMENTS {
            store.add(small_doc(&format!("doc-{i}.txt"))).await.unwrap();
        }

        let err = store.add(small_doc("one-too-many.txt")).await.unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { max: MAX_DOCUMENTS });
        assert_eq!(store.list().await.len(), MAX_DOCUMENTS);
    }

    #[tokio::test]
    async fn remove_deletes_only_the_given_id() {
        let store = MemoryStore::new();
        let keep = store.add(small_doc("keep.txt")).await.unwrap();
        let drop = store.add(small_doc("drop.txt")).await.unwrap();

        store.remove(&drop.id).await.unwrap();

        let listed = store.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
        assert!(!listed.iter().any(|d| d.id == drop.id));
    }

    #[tokio::test]
    async fn remove_unknown_id_fails_and_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store.add(small_doc("only.txt")).await.unwrap();
        let before = store.list().await;

        let err = store.remove("no-such-id").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("no-such-id".to_string()));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn config_defaults_materialize_on_first_read() {
        let store = MemoryStore::new();
        let config = store.get_config().await;
        assert_eq!(config.assistant_name, "DocuSupport AI");
        assert_eq!(
            config.behavior_rules,
            "Always be polite. If unsure, ask the customer for clarification."
        );
    }

    #[tokio::test]
    async fn config_set_then_get_round_trips() {
        let store = MemoryStore::new();
        let wanted = SupportConfig {
            assistant_name: "Helper".to_string(),
            behavior_rules: "Be brief.".to_string(),
        };

        let stored = store.set_config(wanted.clone()).await;
        assert_eq!(stored, wanted);
        assert_eq!(store.get_config().await, wanted);
    }
}
