//! GET /api/config — the assistant configuration, defaults materialized.

use std::sync::Arc;

use axum::{Json, extract::State};
use doc_store::{ConfigStore, SupportConfig};
use tracing::instrument;

use crate::core::app_state::AppState;

/// Handler: GET /api/config
#[instrument(skip_all)]
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SupportConfig> {
    Json(state.store.get_config().await)
}
