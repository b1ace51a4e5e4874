//! Core error types for calmly-core.
//!
//! Failures fall into four groups: transport, authorization, backend
//! rejections (not found, validation) and local problems (configuration,
//! session files). The statistics engine has no error type; it returns
//! defaults for empty input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for calmly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Backend request failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Client-side validation rejected a payload before it was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No stored session
    #[error("Not logged in. Run `calmly auth login` first")]
    NotLoggedIn,

    /// Session exists but the backend never told us the user's id
    #[error("Session has no user id for {email}; log in again")]
    MissingUserId { email: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by the REST backend or the transport under it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing, invalid or expired bearer credential (HTTP 401/403)
    #[error("Unauthorized: credential missing or expired")]
    Unauthorized,

    /// HTTP 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the payload (HTTP 400/422)
    #[error("Rejected by server: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Unexpected HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Base URL could not be parsed
    #[error("Invalid base URL '{url}': {message}")]
    BaseUrl { url: String, message: String },
}

impl ApiError {
    /// Map a non-success status and its body onto the error taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound(extract_detail(body)),
            400 | 422 => ApiError::Validation(extract_detail(body)),
            _ => ApiError::Status {
                status,
                body: extract_detail(body),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers `{"detail": "..."}` for most errors; some proxies
/// answer `{"message": "..."}` or plain text. Structured details (a list of
/// field errors) are passed through as compact JSON.
pub(crate) fn extract_detail(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(value) => {
            for key in ["detail", "message"] {
                match value.get(key) {
                    Some(serde_json::Value::String(s)) => return s.clone(),
                    Some(other) => return other.to_string(),
                    None => {}
                }
            }
            value.to_string()
        }
        Err(_) => trimmed.to_string(),
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No usable data directory
    #[error("Cannot determine data directory: {0}")]
    DataDir(String),
}

/// Validation errors raised before a request leaves the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric field outside its inclusive range
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Text field empty after trimming
    #[error("'{field}' must not be blank")]
    Blank { field: &'static str },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
