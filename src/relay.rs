//! Streaming relay: drives one upstream completion stream and forwards
//! its fragments, in arrival order, as outbound frames.
//!
//! The relay is a single forward pass: Idle until the first chunk is
//! pulled, Streaming while fragments are forwarded, then Terminated
//! exactly once. On natural exhaustion it emits one terminal sentinel;
//! on an upstream failure it emits an error item instead, which aborts
//! the already-committed response body downstream.

use async_stream::stream;
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tracing::{debug, error};

use crate::llm::{ChunkStream, LlmError};
use crate::models::Frame;

/// Failure of the upstream stream after the response was committed.
///
/// Yielded into the response body stream; the transport terminates the
/// connection when it polls this, which is the only way to surface the
/// failure once headers have been sent.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream stream failed: {0}")]
    Upstream(#[from] LlmError),
}

/// Forward an upstream chunk stream as outbound frames.
///
/// Consumes the chunk stream strictly once, in arrival order. Empty
/// fragments are dropped without emitting a frame. After the stream is
/// exhausted normally, exactly one [`Frame::Done`] is emitted. If an
/// upstream error arrives, the error is logged and re-emitted and the
/// forward pass ends without a sentinel.
pub fn forward(mut chunks: ChunkStream) -> impl Stream<Item = Result<Frame, RelayError>> {
    stream! {
        let mut failed = false;

        while let Some(next) = chunks.next().await {
            match next {
                Ok(chunk) => {
                    if chunk.content.is_empty() {
                        continue;
                    }
                    debug!(fragment = %chunk.content, "forwarding chunk");
                    yield Ok(Frame::Content(chunk.content));
                }
                Err(err) => {
                    error!(
                        error = %err,
                        status = ?err.status_code(),
                        request_id = ?err.request_id(),
                        "upstream stream failed mid-flight"
                    );
                    yield Err(RelayError::Upstream(err));
                    failed = true;
                    break;
                }
            }
        }

        if !failed {
            yield Ok(Frame::Done);
        }
    }
}
