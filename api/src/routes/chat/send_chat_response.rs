use serde::Serialize;

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct SendChatResponse {
    /// The assistant's reply text: the model answer, or a user-facing error
    /// string when the completion failed.
    pub text: String,
}
