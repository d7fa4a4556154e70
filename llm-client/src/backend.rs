use async_trait::async_trait;

use crate::{error_handler::Result, request::CompletionRequest};

/// A text-completion capability: one assembled request in, one answer out.
///
/// Exactly one attempt per call; retry policy belongs to the caller.
/// Implementations must not mutate conversation or store state.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
