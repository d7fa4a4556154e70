//! DELETE /api/documents/{id} — removes one stored document.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use doc_store::DocumentStore;
use serde::Serialize;
use tracing::instrument;

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Response body for DELETE /api/documents/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteDocumentResponse {
    pub success: bool,
}

/// Handler: DELETE /api/documents/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteDocumentResponse>> {
    state.store.remove(&id).await?;
    Ok(Json(DeleteDocumentResponse { success: true }))
}
