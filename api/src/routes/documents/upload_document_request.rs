use serde::Deserialize;

/// Request body for POST /api/documents.
///
/// One file per call; a batch uploader posts each file separately and keeps
/// going when an individual file is rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentRequest {
    /// Original file name.
    pub name: String,
    /// Mime type reported by the uploader.
    pub mime_type: String,
    /// Declared size of the decoded payload, in bytes.
    pub size_bytes: u64,
    /// Raw file bytes, base64-encoded.
    pub content: String,
}
