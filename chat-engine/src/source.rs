use async_trait::async_trait;
use doc_store::{ConfigStore, Document, DocumentStore, SupportConfig};

/// Read side of the store, as seen by the conversation session.
///
/// The session captures one snapshot per submission; documents added or
/// removed while a completion is in flight do not affect that request.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// All documents at this moment, in store order.
    async fn snapshot_documents(&self) -> Vec<Document>;

    /// The assistant configuration at this moment.
    async fn snapshot_config(&self) -> SupportConfig;
}

#[async_trait]
impl<T> DocumentSource for T
where
    T: DocumentStore + ConfigStore,
{
    async fn snapshot_documents(&self) -> Vec<Document> {
        self.list().await
    }

    async fn snapshot_config(&self) -> SupportConfig {
        self.get_config().await
    }
}
