//! POST /api/chat/reset — clears the conversation as a whole.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::core::app_state::AppState;

/// Response body for POST /api/chat/reset.
#[derive(Debug, Serialize)]
pub struct ResetChatResponse {
    pub success: bool,
}

/// Handler: POST /api/chat/reset
#[instrument(skip_all)]
pub async fn reset_chat(State(state): State<Arc<AppState>>) -> Json<ResetChatResponse> {
    state.session.lock().await.reset();
    Json(ResetChatResponse { success: true })
}
