//! GET /api/documents — all stored documents, newest first.

use std::sync::Arc;

use axum::{Json, extract::State};
use doc_store::{Document, DocumentStore};
use tracing::instrument;

use crate::core::app_state::AppState;

/// Handler: GET /api/documents
#[instrument(skip_all)]
pub async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<Document>> {
    Json(state.store.list().await)
}
