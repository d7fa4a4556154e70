//! Unified error handling for `llm-client`.
//!
//! A single top-level [`LlmError`] for the whole crate, with domain-specific
//! errors grouped in nested enums: [`ConfigError`] for credential/endpoint
//! setup and [`CompletionError`] for everything that can go wrong during a
//! completion call. Every completion variant carries the model identifier so
//! failures are attributable in logs and diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Top-level error for the `llm-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Configuration/validation errors, checked before any network I/O.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failures of a completion call that reached (or tried to reach) the
    /// service.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Underlying HTTP client error outside a completion call (e.g. the
    /// client could not be built).
    #[error("[LLM Client] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for credential and endpoint configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Service credential absent. Raised per call, before any network I/O,
    /// so a process booted without a key stays up.
    #[error("[LLM Client] missing API credential: set GEMINI_API_KEY")]
    MissingApiKey,

    /// Required environment variable is missing or empty.
    #[error("[LLM Client] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (timeouts, limits).
    #[error("[LLM Client] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// The endpoint is empty or does not start with http/https.
    #[error("[LLM Client] invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Error enum for a single completion attempt. Each variant names the model
/// so the caller can surface a diagnostic without reaching back into config.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Upstream returned a non-successful HTTP status.
    #[error("[LLM Client] model {model} returned HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        model: String,
        status: StatusCode,
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// The request never completed: connect failure, timeout, broken stream.
    #[error("[LLM Client] transport failure talking to model {model}: {detail}")]
    Transport { model: String, detail: String },

    /// Response payload could not be decoded as expected.
    #[error("[LLM Client] failed to decode response from model {model}: {detail}")]
    Decode { model: String, detail: String },

    /// The service answered but produced no candidate text.
    #[error("[LLM Client] model {model} returned no candidate text")]
    EmptyCandidates { model: String },
}

impl CompletionError {
    /// Model identifier attached for diagnostics.
    pub fn model(&self) -> &str {
        match self {
            CompletionError::HttpStatus { model, .. }
            | CompletionError::Transport { model, .. }
            | CompletionError::Decode { model, .. }
            | CompletionError::EmptyCandidates { model } => model,
        }
    }
}

/// Trims a response body down to a log-friendly snippet.
pub fn make_snippet(text: &str) -> String {
    text.chars().take(240).collect()
}

/// Reads an optional, non-empty environment variable.
pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            LlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}
