//! GET /api/chat/messages — the conversation log, oldest first.

use std::sync::Arc;

use axum::{Json, extract::State};
use chat_engine::Message;
use tracing::instrument;

use crate::core::app_state::AppState;

/// Handler: GET /api/chat/messages
#[instrument(skip_all)]
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<Message>> {
    Json(state.session.lock().await.messages().to_vec())
}
