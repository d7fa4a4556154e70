//! Conversation session: an append-only message log driving one grounded
//! completion at a time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use llm_client::{CompletionBackend, CompletionError, ConfigError, LlmError};

use crate::{prompt::build_completion_request, source::DocumentSource};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation log. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Why a submission was rejected before any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The question was empty or whitespace-only.
    EmptyQuestion,
    /// The document store holds nothing to ground an answer in.
    NoDocuments,
    /// Another completion is already in flight.
    AlreadyPending,
}

/// Terminal result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The model answered; a user and an assistant message were appended.
    Answered,
    /// The completion failed; the appended assistant message carries a
    /// user-facing error string instead of an answer.
    Failed,
    /// Guard rejection: no state change, no message appended.
    Rejected(RejectReason),
}

/// The conversation session.
///
/// Messages are append-only and strictly ordered by creation; individual
/// messages are never removed, only the whole log via [`ChatSession::reset`].
/// At most one completion is in flight at a time: the `pending` flag guards
/// against interleaving, and callers sharing a session across tasks must
/// additionally serialize [`ChatSession::submit`] (the HTTP layer holds the
/// session behind a mutex).
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The conversation so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a completion request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clears the whole conversation.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending = false;
        info!("conversation reset");
    }

    /// Submits a customer question.
    ///
    /// Rejected outright (no state change, no message) when the question is
    /// empty, a completion is already pending, or the store snapshot holds
    /// no documents. Otherwise the user message is appended synchronously
    /// before the completion call starts; the documents and configuration
    /// are captured once at that point, so concurrent store changes cannot
    /// affect the in-flight request. Exactly one completion attempt is made,
    /// and the log always gains a matching assistant reply: the model's
    /// answer on success, a user-facing error string on failure. No error
    /// propagates past this method.
    pub async fn submit(
        &mut self,
        question: &str,
        source: &dyn DocumentSource,
        backend: &dyn CompletionBackend,
    ) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::EmptyQuestion);
        }
        if self.pending {
            warn!("submission rejected: completion already in flight");
            return SubmitOutcome::Rejected(RejectReason::AlreadyPending);
        }

        let documents = source.snapshot_documents().await;
        if documents.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::NoDocuments);
        }
        let config = source.snapshot_config().await;

        self.messages.push(Message::new(Role::User, question));
        self.pending = true;

        let request = build_completion_request(question, &documents, &config);
        let outcome = match backend.complete(&request).await {
            Ok(text) => {
                info!(documents = documents.len(), "question answered");
                self.messages.push(Message::new(Role::Assistant, text));
                SubmitOutcome::Answered
            }
            Err(err) => {
                warn!(error = %err, "completion failed; synthesizing assistant reply");
                self.messages
                    .push(Message::new(Role::Assistant, user_facing_message(&err)));
                SubmitOutcome::Failed
            }
        };

        self.pending = false;
        outcome
    }
}

/// Maps an internal completion failure to the reply text shown to the
/// customer. The raw error never reaches the conversation log.
fn user_facing_message(err: &LlmError) -> String {
    match err {
        LlmError::Config(ConfigError::MissingApiKey) => {
            "Support Error: API Key is missing. Please configure it in the environment."
                .to_string()
        }
        LlmError::Completion(CompletionError::EmptyCandidates { .. }) => {
            "I'm sorry, I couldn't generate a response.".to_string()
        }
        LlmError::Completion(e) => format!(
            "Support Error: Failed to get response from AI model ({}). Please check your configuration.",
            e.model()
        ),
        _ => "Support Error: Technical issue. Please try again.".to_string(),
    }
}
