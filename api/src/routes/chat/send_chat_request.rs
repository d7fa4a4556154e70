use serde::Deserialize;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct SendChatRequest {
    /// The customer's question.
    pub message: String,
    /// Prior turns as the client sees them. Accepted for wire compatibility
    /// but not used when assembling the model request; only the newest
    /// question is sent.
    #[serde(default)]
    pub history: Option<Vec<serde_json::Value>>,
}
