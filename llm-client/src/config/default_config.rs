//! Default completion config loaded from environment variables.
//!
//! The only place in the crate that reads the environment; everything else
//! receives an explicit [`CompletionConfig`].
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY` = service credential. Optional at boot: without it the
//!   process starts, and every completion attempt fails with a
//!   configuration error until a key is supplied.
//! - `GEMINI_MODEL`   = model id (default `gemini-1.5-flash`)
//! - `GEMINI_URL`     = API base (default `https://generativelanguage.googleapis.com`)
//! - `LLM_TIMEOUT_SECS` = request timeout in seconds (default 45)

use crate::{
    config::completion_config::CompletionConfig,
    error_handler::{Result, env_opt, env_opt_u64},
};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// API base used when `GEMINI_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Seconds before an in-flight completion fails closed.
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Builds the Gemini completion config from the environment.
///
/// Sampling parameters are fixed for grounded support answers: temperature
/// 0.2, top_p 0.8, top_k 40.
///
/// # Errors
/// [`ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is set but not a
/// valid `u64`.
///
/// [`ConfigError::InvalidNumber`]: crate::error_handler::ConfigError::InvalidNumber
pub fn config_gemini_from_env() -> Result<CompletionConfig> {
    let api_key = env_opt("GEMINI_API_KEY");
    let model = env_opt("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let endpoint = env_opt("GEMINI_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?;

    Ok(CompletionConfig {
        model,
        endpoint,
        api_key,
        temperature: Some(0.2),
        top_p: Some(0.8),
        top_k: Some(40),
        timeout_secs: timeout_secs.or(Some(DEFAULT_TIMEOUT_SECS)),
    })
}
