//! Chat completions client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::{ChatProvider, ChunkStream},
    types::StreamChunk,
};

use super::sse::parse_sse_stream;
use super::types::{ChatCompletionMessage, ChatCompletionRequest, ErrorResponse};

/// Model identifiers for the chat completions endpoint
#[derive(Debug, Clone)]
pub enum OpenAiModel {
    /// GPT-4o mini
    Gpt4oMini,
    /// GPT-4o
    Gpt4o,
}

impl OpenAiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
            OpenAiModel::Gpt4o => "gpt-4o",
        }
    }
}

/// Client for an OpenAI-compatible chat completions API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API credential, sent as a bearer token
    api_key: String,
    /// Base endpoint (e.g. "https://api.openai.com/v1")
    base_url: String,
    /// Model to use
    model: OpenAiModel,
}

impl OpenAiClient {
    /// Create a new chat completions client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Provider credential
    /// * `base_url` - Base endpoint, without the `/chat/completions` suffix
    /// * `model` - Model to use
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, base_url: String, model: OpenAiModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
                request_id: None,
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url,
            model,
        })
    }

    /// Build the endpoint URL for streaming completions
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Make a streaming completion request for a single user message
    async fn make_streaming_request(&self, message: &str) -> Result<ChunkStream, LlmError> {
        let request = ChatCompletionRequest {
            model: self.model.as_str().to_string(),
            messages: vec![ChatCompletionMessage::user(message)],
            stream: true,
        };

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        // Check status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());

            // Prefer the provider's error envelope when it parses
            if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(LlmError::ProviderError {
                    code: envelope
                        .error
                        .code
                        .or(envelope.error.error_type)
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: envelope.error.message,
                    status: status.as_u16(),
                    request_id,
                });
            }

            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
                request_id,
            });
        }

        debug!(model = self.model.as_str(), request_id = ?request_id, "completion stream opened");

        // Parse the SSE stream into chunks and extract the text deltas
        let byte_stream = response.bytes_stream();
        let chunk_stream = parse_sse_stream(Box::pin(byte_stream)).map(|result| {
            result.map(|chunk| StreamChunk::new(chunk.content().unwrap_or_default()))
        });

        Ok(Box::pin(chunk_stream))
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn stream_chat(&self, message: &str) -> Result<ChunkStream, LlmError> {
        self.make_streaming_request(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_as_str() {
        assert_eq!(OpenAiModel::Gpt4oMini.as_str(), "gpt-4o-mini");
        assert_eq!(OpenAiModel::Gpt4o.as_str(), "gpt-4o");
    }

    #[test]
    fn test_endpoint_url_format() {
        let client = OpenAiClient::new(
            "sk-test".to_string(),
            "https://api.openai.com/v1".to_string(),
            OpenAiModel::Gpt4oMini,
        )
        .unwrap();

        assert_eq!(
            client.build_endpoint_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = OpenAiClient::new(
            "sk-test".to_string(),
            "http://localhost:8080/v1/".to_string(),
            OpenAiModel::Gpt4o,
        )
        .unwrap();

        assert_eq!(
            client.build_endpoint_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
