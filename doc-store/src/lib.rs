//! Document and assistant-configuration storage.
//!
//! Owns the uploaded reference documents (capped at 100 documents, 100 MiB
//! per file) and the singleton assistant configuration record. Callers go
//! through the [`DocumentStore`] and [`ConfigStore`] contracts and only ever
//! hold value snapshots; the backing technology is an implementation detail.
//! [`MemoryStore`] is the in-process implementation used by the backend.

pub mod config;
pub mod document;
pub mod errors;
pub mod memory;
pub mod store;

pub use config::SupportConfig;
pub use document::{Document, MAX_DOCUMENTS, MAX_FILE_BYTES, NewDocument};
pub use errors::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::{ConfigStore, DocumentStore};
