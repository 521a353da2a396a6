//! Unified error handling for the API surface

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional detailed error information
    pub details: Option<serde_json::Value>,

    /// HTTP status code equivalent
    #[serde(skip)]
    pub status_code: u16,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            status_code: 500,
        }
    }

    /// Set the HTTP status code
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Add detailed information
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// Predefined error constructors
impl ApiError {
    /// Bad request error (400)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message).with_status(400)
    }

    /// Not found error (404)
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("{} not found", resource.into())).with_status(404)
    }

    /// Internal server error (500)
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message).with_status(500)
    }
}
