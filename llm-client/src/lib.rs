//! Completion client for the hosted Gemini API.
//!
//! One capability: take a fully assembled single-turn request and return the
//! model's text, or fail. Configuration is an explicit struct passed in at
//! construction time; environment reading is confined to the edge loaders in
//! [`config::default_config`]. A single attempt is made per call; retries
//! belong to the caller.

pub mod backend;
pub mod config;
pub mod error_handler;
pub mod request;
pub mod services;

pub use backend::CompletionBackend;
pub use config::completion_config::CompletionConfig;
pub use error_handler::{CompletionError, ConfigError, LlmError, Result};
pub use request::{CompletionRequest, InlineData, Part};
pub use services::gemini_service::GeminiService;
