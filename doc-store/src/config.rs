use serde::{Deserialize, Serialize};

/// Assistant persona settings. A single logical record: at most one instance
/// exists, created lazily with defaults on first read and overwritten
/// wholesale by the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportConfig {
    /// Display name the assistant introduces itself with.
    pub assistant_name: String,
    /// Operator-supplied guidance woven into the assistant instructions.
    /// Empty means "no extra guidance"; both fields accept any string.
    pub behavior_rules: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            assistant_name: "DocuSupport AI".to_string(),
            behavior_rules: "Always be polite. If unsure, ask the customer for clarification."
                .to_string(),
        }
    }
}
