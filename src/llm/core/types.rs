//! Core types for the completion client layer

use serde::{Deserialize, Serialize};

/// One incremental fragment of generated output.
///
/// `content` may be empty; consumers decide whether to forward it.
/// Chunks are transient: consumed and forwarded immediately, never
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    pub content: String,
}

impl StreamChunk {
    /// Create a new chunk with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
