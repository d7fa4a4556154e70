use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doc_store::StoreError;
use llm_client::LlmError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Llm(#[from] LlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Http { status, .. } => *status,

            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Llm(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert store failures to `AppError::Http` with precise status & code.
/// Per-file semantics: a batch uploader keeps going after any of these.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::CapacityExceeded { .. } => AppError::Http {
                status: StatusCode::CONFLICT,
                code: "DOCUMENT_LIMIT_REACHED",
                message,
            },
            StoreError::FileTooLarge { .. } => AppError::Http {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                code: "FILE_TOO_LARGE",
                message,
            },
            StoreError::InvalidContent(_) | StoreError::ContentSizeMismatch { .. } => {
                AppError::Http {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    code: "CONTENT_SIZE_MISMATCH",
                    message,
                }
            }
            StoreError::NotFound(_) => AppError::Http {
                status: StatusCode::NOT_FOUND,
                code: "NOT_FOUND",
                message,
            },
        }
    }
}
