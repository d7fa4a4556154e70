//! POST /api/config — overwrites the assistant configuration wholesale.

use std::sync::Arc;

use axum::{Json, extract::State};
use doc_store::{ConfigStore, SupportConfig};
use tracing::instrument;

use crate::core::app_state::AppState;

/// Handler: POST /api/config
///
/// Full overwrite; the stored value comes back as confirmation. Empty
/// strings are legal on both fields.
#[instrument(skip_all, fields(name = %body.assistant_name))]
pub async fn save_config(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SupportConfig>,
) -> Json<SupportConfig> {
    Json(state.store.set_config(body).await)
}
