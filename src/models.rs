// Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

use crate::llm::LlmError;

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// User message to relay. Absent fields deserialize to an empty
    /// string so the handler owns the presence check.
    #[serde(default)]
    pub message: String,
}

/// JSON error envelope for non-streaming failure responses.
///
/// `None` fields are omitted from the serialized body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorBody {
    /// Client-error body carrying only the error message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            status: None,
        }
    }

    /// Server-error body for an upstream failure, with diagnostics.
    pub fn internal(err: &LlmError) -> Self {
        Self {
            error: "Internal server error".to_string(),
            details: Some(err.to_string()),
            status: err.status_code(),
        }
    }
}

/// One outbound frame of the event stream: a content fragment or the
/// terminal sentinel. Exactly one `Done` is emitted per successful
/// request, after the last fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Content(String),
    Done,
}

impl Frame {
    /// Wire payload carried in the frame's data field.
    pub fn payload(&self) -> String {
        match self {
            Frame::Content(text) => serde_json::json!({ "content": text }).to_string(),
            Frame::Done => "[DONE]".to_string(),
        }
    }
}
