//! Error handling module for the Publica client.
//!
//! Provides a single typed error for every remote operation. The original
//! app collapsed failures to logged strings and rendered empty screens; here
//! every failure path is visible to the caller as a distinct error kind.

use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const STATUS_ERROR: &str = "STATUS_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const AUTH_ERROR: &str = "AUTH_ERROR";
    pub const UPLOAD_ERROR: &str = "UPLOAD_ERROR";
}

/// Client error type covering every remote interaction.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout)
    Network(String),
    /// Non-2xx response from the REST API
    Status { status: u16, message: String },
    /// Requested entity does not exist
    NotFound(String),
    /// Response body could not be decoded
    Decode(String),
    /// Client-side validation rejected the input before any network call
    Validation(String),
    /// Auth provider rejected sign-in or sign-up
    Auth(String),
    /// Image host upload failed or returned no URL
    Upload(String),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => codes::NETWORK_ERROR,
            ApiError::Status { .. } => codes::STATUS_ERROR,
            ApiError::NotFound(_) => codes::NOT_FOUND,
            ApiError::Decode(_) => codes::DECODE_ERROR,
            ApiError::Validation(_) => codes::VALIDATION_ERROR,
            ApiError::Auth(_) => codes::AUTH_ERROR,
            ApiError::Upload(_) => codes::UPLOAD_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(msg) => msg.clone(),
            ApiError::Status { status, message } => format!("HTTP {}: {}", status, message),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Decode(msg) => msg.clone(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Auth(msg) => msg.clone(),
            ApiError::Upload(msg) => msg.clone(),
        }
    }

    /// Whether this error was produced without any request being issued.
    pub fn is_local(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Decode error: {:?}", err);
            return ApiError::Decode(format!("Response decode error: {}", err));
        }
        tracing::error!("Network error: {:?}", err);
        ApiError::Network(format!("Network error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}

/// Error details as surfaced to UI layers that want a structured payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl From<&ApiError> for ErrorDetails {
    fn from(error: &ApiError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.message(),
        }
    }
}
