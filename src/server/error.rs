//! HTTP error responses and server startup errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of a tree request that prevent any tree response from forming.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter could not be parsed.
    #[error("{0}")]
    InvalidQuery(String),
    /// The build task ended without a result.
    #[error("{0}")]
    BuildFailed(String),
}

/// Error response body, the same `{"error": ...}` shape as a root-level tree failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidQuery(message) => {
                tracing::debug!(error = %message, "Rejected tree request");
            }
            ApiError::BuildFailed(message) => {
                tracing::error!(error = %message, "Tree build task failed");
            }
        }
        let body = ApiErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Errors that stop the server from running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
