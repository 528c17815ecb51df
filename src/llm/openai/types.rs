//! OpenAI-specific request and response types
//!
//! These types map directly to the chat completions API schema.

use serde::{Deserialize, Serialize};

/// Request body for a streaming chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Array of messages in the conversation
    pub messages: Vec<ChatCompletionMessage>,
    /// Always true for streaming
    pub stream: bool,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    /// Role: "user", "assistant" or "system"
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatCompletionMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One chunk of a streaming completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChunk {
    /// Provider-assigned completion ID
    #[serde(default)]
    pub id: Option<String>,
    /// Choices (one entry for unbatched requests)
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

impl ChatCompletionChunk {
    /// Incremental text carried by the first choice, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|choice| choice.delta.content.as_deref())
    }
}

/// A single choice within a chunk
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    /// Incremental update for this choice
    #[serde(default)]
    pub delta: ChunkDelta,
    /// Set on the final chunk of the choice
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Incremental delta carried by a chunk
///
/// The first chunk typically carries only the role; content arrives in
/// later chunks and may be absent on the final one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope returned on non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Provider error details
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable description
    pub message: String,
    /// Error classification (e.g. "invalid_request_error")
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Machine-readable code (e.g. "invalid_api_key")
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatCompletionMessage::user("Hello")],
            stream: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Hello\""));
        assert!(json.contains("\"stream\":true"));
    }

    #[test]
    fn test_chunk_with_content() {
        let json = r#"{"id":"chatcmpl-123","object":"chat.completion.chunk","created":1700000000,"model":"gpt-4o-mini","choices":[{"index":0,"delta":{"content":"Hello"},"finish_reason":null}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.id.as_deref(), Some("chatcmpl-123"));
        assert_eq!(chunk.content(), Some("Hello"));
    }

    #[test]
    fn test_chunk_role_only_delta() {
        // First chunk of a stream carries the role and no content
        let json = r#"{"id":"chatcmpl-123","choices":[{"index":0,"delta":{"role":"assistant"},"finish_reason":null}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.choices[0].delta.role.as_deref(), Some("assistant"));
    }

    #[test]
    fn test_chunk_final_with_finish_reason() {
        let json = r#"{"id":"chatcmpl-123","choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_chunk_empty_choices() {
        let json = r#"{"id":"chatcmpl-123","choices":[]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), None);
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#;
        let envelope: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.message, "Incorrect API key provided");
        assert_eq!(
            envelope.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
        assert_eq!(envelope.error.code.as_deref(), Some("invalid_api_key"));
    }

    #[test]
    fn test_error_response_without_code() {
        let json = r#"{"error":{"message":"The server is overloaded","type":"server_error"}}"#;
        let envelope: ErrorResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.error.code.is_none());
        assert_eq!(envelope.error.error_type.as_deref(), Some("server_error"));
    }
}
