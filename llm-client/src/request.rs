//! Payload types for a single completion turn.

use serde::Serialize;

/// One part of a completion turn.
///
/// Wire shape follows the Gemini `generateContent` contract: inline binary
/// attachments serialize as `{"inlineData": {"mimeType": ..., "data": ...}}`
/// and text as `{"text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    /// Raw file bytes, base64-encoded, tagged with their mime type.
    InlineData(InlineData),
    /// Plain text.
    Text(String),
}

/// Inline attachment payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 text, passed through untouched.
    pub data: String,
}

/// A fully assembled, single-turn completion request.
///
/// Everything the model needs for one grounded answer travels in one
/// user-role turn: document attachments, assistant instructions, a context
/// note, and the question itself. There is no separate system role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub parts: Vec<Part>,
}

impl CompletionRequest {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_serialize_with_gemini_wire_names() {
        let inline = serde_json::to_value(Part::InlineData(InlineData {
            mime_type: "text/plain".to_string(),
            data: "QQ==".to_string(),
        }))
        .unwrap();
        assert_eq!(inline["inlineData"]["mimeType"], "text/plain");
        assert_eq!(inline["inlineData"]["data"], "QQ==");

        let text = serde_json::to_value(Part::Text("hello".to_string())).unwrap();
        assert_eq!(text["text"], "hello");
    }
}
