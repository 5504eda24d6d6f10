//! Error types for trackscout.
//!
//! Normalization failures (`InvalidQuery`) are usually absorbed by the gateway
//! and turned into empty results. Authentication and upstream failures travel
//! up to the HTTP layer where they become 5xx responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for trackscout operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Search text or identifier rejected before any upstream call.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Credentials missing or rejected by the provider.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Transport or protocol failure talking to the provider.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Upstream(e.to_string())
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenience Result type using the trackscout [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
