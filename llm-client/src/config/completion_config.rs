/// Configuration for the completion service.
///
/// Built once at startup and passed into [`GeminiService::new`]; no ambient
/// environment lookups happen inside the client.
///
/// [`GeminiService::new`]: crate::services::gemini_service::GeminiService::new
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model identifier (e.g. `"gemini-1.5-flash"`).
    pub model: String,

    /// API base endpoint (scheme + host, no trailing path).
    pub endpoint: String,

    /// Service credential. `None` is legal at construction time; completion
    /// calls then fail with a configuration error before any network I/O.
    pub api_key: Option<String>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff.
    pub top_k: Option<u32>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}
