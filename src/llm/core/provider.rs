//! Provider trait for streaming chat completions

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

use super::{error::LlmError, types::StreamChunk};

/// Stream of incremental completion chunks from the provider.
///
/// Finite, consumed strictly once in arrival order; not restartable.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, LlmError>> + Send + Sync>>;

/// Interface the relay depends on for upstream completions.
///
/// Implementations are shared across concurrent requests behind an
/// `Arc` and must not require mutation to serve a request.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Open a streaming completion for a single user-role message.
    ///
    /// Suspends until the provider begins responding. The returned
    /// stream ends when the provider signals completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be issued or the provider
    /// rejects it before streaming begins.
    async fn stream_chat(&self, message: &str) -> Result<ChunkStream, LlmError>;
}
