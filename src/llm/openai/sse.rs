//! Server-Sent Events (SSE) parser for chat completion responses
//!
//! The chat completions API streams chunks as:
//! ```text
//! data: {"id":"chatcmpl-123","choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"id":"chatcmpl-123","choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//!
//! This parser:
//! 1. Buffers incoming bytes
//! 2. Scans for event boundaries (double newline)
//! 3. Extracts and parses JSON from `data:` lines
//! 4. Treats the `[DONE]` sentinel as end of stream

use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use crate::llm::core::error::LlmError;

use super::types::ChatCompletionChunk;

/// Outcome of parsing a single SSE event block
enum Parsed {
    Chunk(Result<ChatCompletionChunk, LlmError>),
    Done,
    Ignore,
}

/// Parse a stream of bytes as chat completion chunks.
///
/// The returned stream ends after the `[DONE]` sentinel; any bytes that
/// arrive after it are discarded.
pub fn parse_sse_stream(
    byte_stream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send + Sync>>,
) -> Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, LlmError>> + Send + Sync>> {
    // Buffer to accumulate partial events
    let mut buffer = String::new();
    let mut done = false;

    let chunk_stream = byte_stream.flat_map(move |chunk_result| {
        if done {
            return futures::stream::iter(Vec::new());
        }

        let chunk = match chunk_result {
            Ok(bytes) => bytes,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(e.to_string()))]);
            }
        };

        // Convert bytes to string and append to buffer
        let text = match std::str::from_utf8(&chunk) {
            Ok(t) => t,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(format!(
                    "Invalid UTF-8 in stream: {}",
                    e
                )))]);
            }
        };

        buffer.push_str(text);

        // Process complete events (delimited by \n\n)
        let mut chunks = Vec::new();
        while let Some(event_end) = buffer.find("\n\n") {
            let event_text = buffer[..event_end].to_string();
            buffer.drain(..=event_end + 1); // Remove event + one of the newlines

            match parse_event(&event_text) {
                Parsed::Chunk(result) => chunks.push(result),
                Parsed::Done => {
                    done = true;
                    buffer.clear();
                    break;
                }
                Parsed::Ignore => {}
            }
        }

        // Return all chunks found in this byte chunk
        futures::stream::iter(chunks)
    });

    Box::pin(chunk_stream)
}

/// Parse a single SSE event from its text representation
fn parse_event(event_text: &str) -> Parsed {
    let mut data: Option<String> = None;

    for line in event_text.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with(':') {
            continue;
        }

        if let Some(data_val) = line.strip_prefix("data:") {
            data = Some(data_val.trim().to_string());
        }
    }

    let Some(data) = data else {
        return Parsed::Ignore;
    };

    if data.is_empty() {
        return Parsed::Ignore;
    }

    // Terminal sentinel from the provider
    if data == "[DONE]" {
        return Parsed::Done;
    }

    match serde_json::from_str::<ChatCompletionChunk>(&data) {
        Ok(chunk) => Parsed::Chunk(Ok(chunk)),
        Err(e) => Parsed::Chunk(Err(LlmError::SerializationError(format!(
            "Failed to parse completion chunk: {}. Data: {}",
            e, data
        )))),
    }
}
