//! Error handling for the faucet relay.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Faucet relay error types
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("Downstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        // Transport and internal errors are collapsed into one generic message
        // so no downstream or internal detail reaches the caller.
        let (status, error_message) = match self {
            RelayError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            RelayError::InvalidAddress(_) => (StatusCode::BAD_REQUEST, "Invalid wallet address"),
            RelayError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process faucet request",
            ),
            RelayError::Config(_) | RelayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
