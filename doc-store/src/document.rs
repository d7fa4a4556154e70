use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of documents the store will hold.
pub const MAX_DOCUMENTS: usize = 100;

/// Maximum size of a single uploaded file, in bytes (100 MiB).
pub const MAX_FILE_BYTES: u64 = 100 * 1024 * 1024;

/// An uploaded reference document.
///
/// Immutable once stored: there is no update operation, only add and remove.
/// The store owns the record; everything else refers to it by id or works on
/// a cloned snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Store-assigned opaque id.
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Mime type reported at upload time.
    pub mime_type: String,
    /// Raw file bytes, base64-encoded. Decodes to exactly `size_bytes` bytes.
    pub content: String,
    /// Decoded payload size in bytes.
    pub size_bytes: u64,
    /// When the document was stored.
    pub uploaded_at: DateTime<Utc>,
}

/// Payload for creating a document; the store assigns the id and upload time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub mime_type: String,
    /// Raw file bytes, base64-encoded.
    pub content: String,
    /// Declared size of the decoded payload.
    pub size_bytes: u64,
}
