//! Gemini service for grounded text generation.
//!
//! Thin non-streaming client for the Gemini REST API:
//! - `POST {endpoint}/v1beta/models/{model}:generateContent`
//!
//! The credential travels in the `x-goog-api-key` header and is checked on
//! every call before any network I/O, so a process booted without a key
//! stays up and each completion attempt fails with a configuration error
//! instead.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use async_trait::async_trait;

use crate::{
    backend::CompletionBackend,
    config::completion_config::CompletionConfig,
    error_handler::{CompletionError, ConfigError, Result, make_snippet},
    request::{CompletionRequest, Part},
};

/// Thin client for Gemini.
///
/// Constructed from a complete [`CompletionConfig`]. Reuses an HTTP client
/// with a bounded timeout; a request that exceeds it fails closed as a
/// completion error rather than hanging.
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: CompletionConfig,
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// A missing API key is deliberately not an error here — see
    /// [`GeminiService::generate`].
    ///
    /// # Errors
    /// - [`ConfigError::InvalidEndpoint`] if `cfg.endpoint` is empty or not
    ///   http(s)
    /// - [`LlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: CompletionConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(45));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!("{}/v1beta/models/{}:generateContent", base, cfg.model);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(45),
            has_api_key = cfg.api_key.is_some(),
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a single **non-streaming** `generateContent` call.
    ///
    /// One attempt, no retries; the caller decides whether to resend.
    ///
    /// # Errors
    /// - [`ConfigError::MissingApiKey`] if no credential is configured
    ///   (raised before any network I/O)
    /// - [`CompletionError::Transport`] for connect failures and timeouts
    /// - [`CompletionError::HttpStatus`] for non-2xx responses
    /// - [`CompletionError::Decode`] if the JSON cannot be parsed
    /// - [`CompletionError::EmptyCandidates`] if no candidate text came back
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, request: &CompletionRequest) -> Result<String> {
        let started = Instant::now();

        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let body = GenerateContentBody::from_request(&self.cfg, request);

        debug!(parts = request.parts.len(), "POST {}", self.url_generate);

        let resp = self
            .client
            .post(&self.url_generate)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport {
                model: self.cfg.model.clone(),
                detail: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_generate.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "generateContent returned non-success status"
            );

            return Err(CompletionError::HttpStatus {
                model: self.cfg.model.clone(),
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: GenerateContentResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode generateContent response"
                );
                return Err(CompletionError::Decode {
                    model: self.cfg.model.clone(),
                    detail: format!("serde error: {e}; expected `candidates[0].content.parts`"),
                }
                .into());
            }
        };

        let text = out
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(CompletionError::EmptyCandidates {
                model: self.cfg.model.clone(),
            }
            .into());
        }

        info!(
            latency_ms = started.elapsed().as_millis(),
            answer_len = text.len(),
            "completion finished"
        );

        Ok(text)
    }
}

#[async_trait]
impl CompletionBackend for GeminiService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.generate(request).await
    }
}

/* ==========================
HTTP payloads
========================== */

/// Request body for `generateContent` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: Vec<ContentBody<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentBody<'a> {
    /// Builds the wire body from config and the assembled request turn.
    fn from_request(cfg: &CompletionConfig, request: &'a CompletionRequest) -> Self {
        let generation_config = GenerationConfig {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            top_k: cfg.top_k,
        };

        Self {
            contents: vec![ContentBody {
                role: "user",
                parts: &request.parts,
            }],
            generation_config: Some(generation_config),
        }
    }
}

/// A single content turn on the wire.
#[derive(Debug, Serialize)]
struct ContentBody<'a> {
    role: &'a str,
    parts: &'a [Part],
}

/// Subset of Gemini `generationConfig`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

/// Response body for `generateContent`. Minimal shape: the generated text
/// lives in `candidates[*].content.parts[*].text`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error_handler::LlmError, request::InlineData};

    fn cfg(api_key: Option<String>) -> CompletionConfig {
        CompletionConfig {
            model: "gemini-1.5-flash".to_string(),
            // Unroutable on purpose: a request that reaches the network
            // fails with a transport error, not a config error.
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key,
            temperature: Some(0.2),
            top_p: Some(0.8),
            top_k: Some(40),
            timeout_secs: Some(1),
        }
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        let mut bad = cfg(None);
        bad.endpoint = "localhost:11434".to_string();
        assert!(matches!(
            GeminiService::new(bad),
            Err(LlmError::Config(ConfigError::InvalidEndpoint(_)))
        ));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_io() {
        let svc = GeminiService::new(cfg(None)).unwrap();
        let request = CompletionRequest::new(vec![Part::Text("hi".to_string())]);

        match svc.generate(&request).await {
            Err(LlmError::Config(ConfigError::MissingApiKey)) => {}
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_credential_counts_as_missing() {
        let svc = GeminiService::new(cfg(Some("   ".to_string()))).unwrap();
        let request = CompletionRequest::new(vec![Part::Text("hi".to_string())]);

        match svc.generate(&request).await {
            Err(LlmError::Config(ConfigError::MissingApiKey)) => {}
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn body_serializes_with_camel_case_wire_fields() {
        let request = CompletionRequest::new(vec![
            Part::InlineData(InlineData {
                mime_type: "text/plain".to_string(),
                data: "QQ==".to_string(),
            }),
            Part::Text("q".to_string()),
        ]);
        let body = GenerateContentBody::from_request(&cfg(Some("k".to_string())), &request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "text/plain"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "q");

        let generation = &json["generationConfig"];
        let temperature = generation["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
        assert!(generation.get("topP").is_some());
        assert_eq!(generation["topK"], 40);
    }
}
