//! Typed error handling for rental-board
//!
//! # Error Categories
//!
//! - [`FetchError`]: the data source could not deliver a record list
//! - [`ValidationError`]: user input (dates, page numbers) was rejected
//! - [`ConfigError`]: the board configuration is unusable
//!
//! Fetch and validation errors roll up into [`BoardError`], which knows its
//! HTTP status and renders as a JSON error body. Configuration errors stop
//! the server before it binds and never reach a handler.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.refresh(source.as_ref()).await {
//!     FetchOutcome::Loaded { count, .. } => println!("{} records", count),
//!     FetchOutcome::Failed { error: FetchError::Status { status, .. }, .. } => {
//!         eprintln!("source said {}", status)
//!     }
//!     FetchOutcome::Failed { error, .. } => eprintln!("fetch failed: {}", error),
//!     FetchOutcome::Discarded { generation } => eprintln!("stale fetch {}", generation),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for rental-board
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BoardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardError::Fetch(e) => e.status_code(),
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            BoardError::Fetch(e) => e.error_code(),
            BoardError::Validation(e) => e.error_code(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BoardError::Validation(ValidationError::InvalidDateParam { field, value }) => {
                Some(serde_json::json!({ "field": field, "value": value }))
            }
            BoardError::Fetch(FetchError::Status { url, status }) => {
                Some(serde_json::json!({ "url": url, "status": status }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// Failures of the data source
///
/// A fetch error is never fatal: the store falls back to an empty collection
/// and the board keeps serving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, TLS failure, timeout...
    #[error("Failed to reach data source '{url}': {message}")]
    Transport { url: String, message: String },

    /// The source answered with a non-success status
    #[error("Data source '{url}' answered with status {status}")]
    Status { url: String, status: u16 },

    /// The payload was not a JSON array of vehicle records
    #[error("Failed to decode vehicle records: {message}")]
    Decode { message: String },

    /// A file-backed source could not be read
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    /// The source is not available at all
    #[error("Data source unavailable: {message}")]
    Unavailable { message: String },
}

impl FetchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::Transport { .. } => StatusCode::BAD_GATEWAY,
            FetchError::Status { .. } => StatusCode::BAD_GATEWAY,
            FetchError::Decode { .. } => StatusCode::BAD_GATEWAY,
            FetchError::Io { .. } => StatusCode::SERVICE_UNAVAILABLE,
            FetchError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT_ERROR",
            FetchError::Status { .. } => "FETCH_STATUS_ERROR",
            FetchError::Decode { .. } => "FETCH_DECODE_ERROR",
            FetchError::Io { .. } => "FETCH_IO_ERROR",
            FetchError::Unavailable { .. } => "FETCH_UNAVAILABLE",
        }
    }

    pub fn decode(err: serde_json::Error) -> Self {
        FetchError::Decode {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A value is not a canonical `YYYY-MM-DD` date
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A named filter parameter holds an invalid date
    #[error("Invalid date '{value}' for '{field}', expected YYYY-MM-DD")]
    InvalidDateParam { field: String, value: String },

    /// Pages are numbered from 1
    #[error("Invalid page {page}, pages start at 1")]
    InvalidPage { page: usize },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { .. } | ValidationError::InvalidDateParam { .. } => {
                "INVALID_DATE"
            }
            ValidationError::InvalidPage { .. } => "INVALID_PAGE",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Failed to build data source: {message}")]
    Source { message: String },
}
