use async_trait::async_trait;

use crate::{
    config::SupportConfig,
    document::{Document, NewDocument},
    errors::Result,
};

/// CRUD contract for the document store.
///
/// Implementations own the records; callers only ever see value snapshots
/// and refer to documents by id. Reads may run concurrently; writes are
/// serialized per record by the implementation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns all documents, most recent upload first.
    ///
    /// Repeating the call without intervening writes yields an identical
    /// sequence.
    async fn list(&self) -> Vec<Document>;

    /// Persists a new document, assigning a fresh id and upload time.
    ///
    /// # Errors
    /// - [`StoreError::CapacityExceeded`] when the store already holds
    ///   [`MAX_DOCUMENTS`] documents
    /// - [`StoreError::FileTooLarge`] when `size_bytes` exceeds
    ///   [`MAX_FILE_BYTES`]
    /// - [`StoreError::InvalidContent`] when the payload is not base64
    /// - [`StoreError::ContentSizeMismatch`] when it decodes to a different
    ///   size than declared
    ///
    /// The store is left unchanged on every rejection.
    ///
    /// [`StoreError::CapacityExceeded`]: crate::StoreError::CapacityExceeded
    /// [`StoreError::FileTooLarge`]: crate::StoreError::FileTooLarge
    /// [`StoreError::InvalidContent`]: crate::StoreError::InvalidContent
    /// [`StoreError::ContentSizeMismatch`]: crate::StoreError::ContentSizeMismatch
    /// [`MAX_DOCUMENTS`]: crate::MAX_DOCUMENTS
    /// [`MAX_FILE_BYTES`]: crate::MAX_FILE_BYTES
    async fn add(&self, new: NewDocument) -> Result<Document>;

    /// Removes a document by id.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no document has the given id; the store
    /// is left unchanged.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn remove(&self, id: &str) -> Result<()>;
}

/// Contract for the singleton assistant configuration record.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Returns the configuration, materializing defaults on first access.
    async fn get_config(&self) -> SupportConfig;

    /// Overwrites the configuration wholesale and returns the stored value.
    async fn set_config(&self, config: SupportConfig) -> SupportConfig;
}
