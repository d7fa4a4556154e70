//! POST /api/chat — one grounded question/answer exchange.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chat_engine::{RejectReason, SubmitOutcome};
use tracing::instrument;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::{send_chat_request::SendChatRequest, send_chat_response::SendChatResponse},
};

/// Handler: POST /api/chat
///
/// Drives the conversation session: the question and a matching assistant
/// reply are appended for every accepted submission, so a completion
/// failure still answers 200 with the synthesized reply text. Only guard
/// rejections (empty question, empty knowledge base, submission already in
/// flight) surface as an error status.
#[instrument(
    skip_all,
    fields(
        message_len = body.message.len(),
        history_len = body.history.as_ref().map_or(0, |h| h.len()),
    )
)]
pub async fn send_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SendChatRequest>,
) -> AppResult<Json<SendChatResponse>> {
    let mut session = state.session.lock().await;
    let outcome = session
        .submit(&body.message, state.store.as_ref(), &state.llm)
        .await;

    match outcome {
        SubmitOutcome::Rejected(reason) => Err(AppError::Http {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "SUBMISSION_REJECTED",
            message: reject_message(reason).to_string(),
        }),
        SubmitOutcome::Answered | SubmitOutcome::Failed => {
            let text = session
                .messages()
                .last()
                .map(|m| m.text.clone())
                .unwrap_or_default();
            Ok(Json(SendChatResponse { text }))
        }
    }
}

fn reject_message(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::EmptyQuestion => "Question must not be empty.",
        RejectReason::NoDocuments => "No documents uploaded yet.",
        RejectReason::AlreadyPending => "A question is already being answered.",
    }
}
