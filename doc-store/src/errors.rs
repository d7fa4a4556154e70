use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by the document and configuration stores.
///
/// All variants are per-record outcomes for the immediate caller; a batch
/// upload treats each rejection independently and keeps going.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store already holds the maximum number of documents.
    #[error("document limit reached: the store already holds {max} documents")]
    CapacityExceeded { max: usize },

    /// A single file exceeded the per-file size cap.
    #[error("file too large: {got} bytes exceeds the {max} byte limit")]
    FileTooLarge { got: u64, max: u64 },

    /// The payload was not valid base64.
    #[error("content is not valid base64: {0}")]
    InvalidContent(String),

    /// The base64 payload did not decode to the declared size.
    #[error("content does not match declared size: declared {declared} bytes, decoded {decoded}")]
    ContentSizeMismatch { declared: u64, decoded: u64 },

    /// No document with the given id exists.
    #[error("document not found: {0}")]
    NotFound(String),
}
