//! Completion client layer
//!
//! This module provides the interface the relay uses to stream chat
//! completions, along with a client for OpenAI-compatible APIs.

pub mod core;
pub mod openai;

// Re-export commonly used types
pub use self::core::{
    error::LlmError,
    provider::{ChatProvider, ChunkStream},
    types::StreamChunk,
};

pub use self::openai::{OpenAiClient, OpenAiModel};
