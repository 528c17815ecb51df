//! OpenAI-compatible chat completions client

pub mod client;
pub mod sse;
pub mod types;

pub use client::{OpenAiClient, OpenAiModel};
