//! HTTP boundary for the DocuSupport backend.
//!
//! Routes mirror the storage, configuration, and chat contracts one to one;
//! all state lives in a shared [`AppState`] built once at startup.

use std::{env, sync::Arc};

mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::signal;
use tracing::info;

pub use crate::core::app_state::AppState;
use crate::{
    error_handler::{AppError, AppResult},
    routes::{
        chat::{
            list_messages_route::list_messages, reset_chat_route::reset_chat,
            send_chat_route::send_chat,
        },
        config::{get_config_route::get_config, save_config_route::save_config},
        documents::{
            delete_document_route::delete_document, list_documents_route::list_documents,
            upload_document_route::upload_document,
        },
    },
};

/// Builds the router over the given state.
///
/// Factored out of [`start`] so tests can serve the routes on an ephemeral
/// listener with injected state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/documents", get(list_documents).post(upload_document))
        .route("/api/documents/{id}", delete(delete_document))
        .route("/api/config", get(get_config).post(save_config))
        .route("/api/chat", post(send_chat))
        .route("/api/chat/reset", post(reset_chat))
        .route("/api/chat/messages", get(list_messages))
        .with_state(state)
}

/// Builds state from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let addr = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
