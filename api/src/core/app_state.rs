use std::sync::Arc;

use chat_engine::ChatSession;
use doc_store::MemoryStore;
use llm_client::{GeminiService, config::default_config::config_gemini_from_env};
use tokio::sync::Mutex;

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Document and configuration records.
    pub store: Arc<MemoryStore>,
    /// The conversation session. The mutex serializes submissions, so at
    /// most one completion is in flight no matter how many clients talk to
    /// the chat route.
    pub session: Mutex<ChatSession>,
    /// Completion client, built once at startup.
    pub llm: GeminiService,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// A missing API credential is not an error here: the process boots,
    /// and each chat submission fails with a configuration error until a
    /// key is supplied.
    pub fn from_env() -> AppResult<Self> {
        let cfg = config_gemini_from_env()?;
        let llm = GeminiService::new(cfg)?;

        Ok(Self::new(Arc::new(MemoryStore::new()), llm))
    }

    /// State over injected collaborators; the storage and transport choices
    /// stay outside the handlers.
    pub fn new(store: Arc<MemoryStore>, llm: GeminiService) -> Self {
        Self {
            store,
            session: Mutex::new(ChatSession::new()),
            llm,
        }
    }
}
