//! POST /api/documents — stores one uploaded document.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use doc_store::{Document, DocumentStore, NewDocument};
use tracing::instrument;

use crate::{
    core::app_state::AppState, error_handler::AppResult,
    routes::documents::upload_document_request::UploadDocumentRequest,
};

/// Handler: POST /api/documents
///
/// Returns the created record, or a capacity/size error for this file only.
#[instrument(skip_all, fields(name = %body.name, size = body.size_bytes))]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UploadDocumentRequest>,
) -> AppResult<(StatusCode, Json<Document>)> {
    let document = state
        .store
        .add(NewDocument {
            name: body.name,
            mime_type: body.mime_type,
            content: body.content,
            size_bytes: body.size_bytes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}
