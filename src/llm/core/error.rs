//! Error types for the completion client layer

use thiserror::Error;

/// Errors that can occur when streaming from the completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError {
        status: u16,
        body: String,
        request_id: Option<String>,
    },

    /// SSE stream parsing failures
    #[error("Stream error: {0}")]
    StreamError(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Errors reported by the provider's error envelope
    #[error("Provider error ({code}): {message}")]
    ProviderError {
        code: String,
        message: String,
        status: u16,
        request_id: Option<String>,
    },
}

impl LlmError {
    /// Upstream HTTP status, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::HttpError { status, .. } if *status != 0 => Some(*status),
            LlmError::ProviderError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider-assigned request identifier, when one was received.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            LlmError::HttpError { request_id, .. }
            | LlmError::ProviderError { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

// Implement conversion from common error types
impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
                request_id: None,
            }
        } else {
            LlmError::HttpError {
                status: 0,
                body: err.to_string(),
                request_id: None,
            }
        }
    }
}
