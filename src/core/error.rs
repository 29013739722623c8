//! Typed error handling for the restkit framework
//!
//! Two layers of errors:
//!
//! - [`StoreError`]: faults raised by storage backends. Absence is *not* a
//!   store error — stores report missing ids through `Option`/`bool` return
//!   channels and keep this type for genuine faults.
//! - [`ApiError`]: request outcomes surfaced over HTTP. Implements
//!   `IntoResponse`, so handlers can return `Result<_, ApiError>` and get
//!   the correct status code and a structured JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Faults raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A versioned write lost a race against a concurrent mutation.
    ///
    /// Only ORM-backed stores produce this; callers re-check existence once
    /// to distinguish a true write race from a stale not-found.
    #[error("concurrent modification of {resource} {id}")]
    Conflict { resource: &'static str, id: i64 },

    /// The backend itself failed (connectivity, corruption, bad schema).
    /// Never masked as not-found.
    #[error("storage backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Request outcomes surfaced over HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource id is absent (404).
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Malformed payload or path/body identifier mismatch (400).
    #[error("{0}")]
    BadRequest(String),

    /// A concurrent mutation was detected during persistence (409).
    #[error("{resource} with id '{id}' was modified concurrently")]
    Conflict { resource: &'static str, id: i64 },

    /// Missing, invalid, or expired authentication assertion (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Persistence-collaborator fault unrelated to the request (500).
    #[error("storage error: {0}")]
    Storage(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to the JSON body rendered over HTTP
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.error_code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_body())).into_response()
    }
}
