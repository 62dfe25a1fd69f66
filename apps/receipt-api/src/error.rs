//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt API                            │
//! │                                                                         │
//! │  Handler ── Result<T, ApiError>                                         │
//! │     │                                                                   │
//! │     ├── body not JSON?        serde_json::Error ──► 400 Invalid JSON   │
//! │     ├── receipt invalid?      ValidationError ────► 400 <reason>       │
//! │     ├── id unknown?           StoreError::NotFound ► 404               │
//! │     └── store broken?         StoreError::Poisoned ► 500 (logged)      │
//! │                                                                         │
//! │  Bodies are plain text, the way `http.Error` style APIs respond.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use receipt_core::ValidationError;
use receipt_store::StoreError;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded as a receipt.
    #[error("Invalid JSON payload")]
    InvalidJson(#[source] serde_json::Error),

    /// The receipt failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No receipt with this id.
    #[error("Receipt not found")]
    NotFound(String),

    /// Anything the client cannot fix.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound(id),
            StoreError::Poisoned(msg) => {
                tracing::error!("Points store unavailable: {}", msg);
                ApiError::Internal(msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Task(String),
}
