//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Body returned by `/convert` and `/merge`.
///
/// The server answers `{"message": ...}` on success and `{"message": ...}`
/// or `{"error": ...}` on failure. Each field is read on its own: a field of
/// the wrong type is ignored without discarding the others, and a body that
/// is not a JSON object yields no fields at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerReply {
    /// Human readable result, e.g. "2 file(s) processed successfully."
    pub message: Option<String>,
    /// Error description
    pub error: Option<String>,
}

impl ServerReply {
    /// Decode a raw response body.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            message: field("message"),
            error: field("error"),
        }
    }

    /// `message`, treating an empty string as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// `error`, treating an empty string as absent.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// HTTP-level result of an upload: status flag plus the decoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadReply {
    /// `true` for 2xx responses
    pub ok: bool,
    /// HTTP status code
    pub status: u16,
    /// Decoded body (no fields when it was not a JSON object)
    pub body: ServerReply,
}

/// Response of `GET /output-info`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputInfo {
    /// Absolute path of the server's output folder
    #[serde(default)]
    pub output_folder: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Building the request failed (FormData, body).
    Request(String),
    /// Network/HTTP transport error.
    Network(String),
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
