//! Error types for the relay server.
//!
//! This module defines a unified error handling system using `thiserror`.
//! All errors are converted to appropriate HTTP responses automatically.
//!
//! # Error Categories
//!
//! - **Client errors (400)**: missing/malformed Authorization header,
//!   missing required fields, unreadable request bodies
//! - **Server errors (500)**: failed upstream calls, configuration problems
//!
//! Upstream failures carry the upstream's own error body when one was
//! obtainable; it is surfaced to the caller under `details`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::error::{AppError, Result};
//!
//! fn event_id(raw: &str) -> Result<&str> {
//!     if raw.is_empty() {
//!         return Err(AppError::missing_field("Event ID"));
//!     }
//!     Ok(raw)
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Each variant is mapped to an HTTP status code and a JSON body of the
/// shape `{"error": <message>}`, with upstream failures additionally
/// carrying `"details"`.
#[derive(Debug, Error)]
pub enum AppError {
    // -------------------------------------------------------------------------
    // Client Errors (4xx)
    // -------------------------------------------------------------------------
    /// No `Authorization` header on a protected route
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    /// `Authorization` header present but not `Bearer <token>`
    #[error("Invalid Authorization format. Use 'Bearer <token>'")]
    MalformedAuthHeader,

    /// A required request field is absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Request body could not be read as JSON or multipart form data
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // -------------------------------------------------------------------------
    // Server Errors (5xx)
    // -------------------------------------------------------------------------
    /// An upstream API call failed (network error, non-2xx status, or a
    /// malformed response where a shape was required)
    #[error("{message}")]
    Upstream {
        /// Operation-specific summary, e.g. "Failed to fetch event details"
        message: String,
        /// Upstream error body when obtainable, else the transport error
        details: Value,
    },

    /// Configuration error (startup only)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a missing-field error for the named field
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create an invalid-body error
    pub fn invalid_body<S: Into<String>>(msg: S) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Wrap an upstream failure with an operation-specific message
    pub fn upstream<S: Into<String>>(message: S, err: crate::services::UpstreamError) -> Self {
        Self::Upstream {
            message: message.into(),
            details: err.into_details(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthHeader
            | Self::MalformedAuthHeader
            | Self::MissingField(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,

            Self::Upstream { .. } | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// Error response body sent to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Upstream error body, present only for failed upstream calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Attach an upstream error body
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!(error = %self, "Server error occurred");
        } else {
            tracing::debug!(error = %self, "Client error occurred");
        }

        let body = match self {
            Self::Upstream { message, details } => ErrorResponse::new(message).with_details(details),
            other => ErrorResponse::new(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::MissingAuthHeader.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::missing_field("Event ID").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream {
                message: "Failed to fetch token".to_string(),
                details: json!({"error": "invalid_client"}),
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(AppError::MalformedAuthHeader.is_client_error());
        assert!(!AppError::MalformedAuthHeader.is_server_error());
        assert!(AppError::Config("missing".to_string()).is_server_error());
    }

    #[test]
    fn test_exact_messages() {
        assert_eq!(
            AppError::MissingAuthHeader.to_string(),
            "Missing Authorization header"
        );
        assert_eq!(
            AppError::MalformedAuthHeader.to_string(),
            "Invalid Authorization format. Use 'Bearer <token>'"
        );
        assert_eq!(
            AppError::missing_field("Image Type").to_string(),
            "Image Type is required"
        );
    }

    #[test]
    fn test_details_serialization() {
        let body = ErrorResponse::new("Failed to fetch event details")
            .with_details(json!({"status": 404}));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"], "Failed to fetch event details");
        assert_eq!(value["details"]["status"], 404);

        let bare = serde_json::to_value(ErrorResponse::new("Event ID is required")).unwrap();
        assert!(bare.get("details").is_none());
    }
}
