// POST /api/chat handler

use std::sync::Arc;

use futures_util::StreamExt;
use tracing::{debug, error};
use warp::http::StatusCode;
use warp::Reply;

use crate::llm::ChatProvider;
use crate::models::{ChatRequest, ErrorBody};
use crate::relay;
use crate::sse;

/// Accept a chat message, open the upstream completion stream, and
/// reply with a server-sent event stream of generated fragments.
///
/// Missing or empty messages are rejected with a 400 before any
/// upstream interaction. Upstream failures that occur before the
/// response is committed surface as a 500 with a JSON body; once
/// streaming has begun, a failure terminates the connection instead.
pub async fn chat_handler(
    provider: Arc<dyn ChatProvider>,
    request: ChatRequest,
) -> Result<warp::reply::Response, warp::Rejection> {
    if request.message.is_empty() {
        let body = warp::reply::json(&ErrorBody::new("Message is required"));
        return Ok(warp::reply::with_status(body, StatusCode::BAD_REQUEST).into_response());
    }

    debug!(message = %request.message, "creating chat completion");

    match provider.stream_chat(&request.message).await {
        Ok(chunks) => {
            let events =
                relay::forward(chunks).map(|item| item.map(|frame| sse::frame_event(&frame)));
            let reply = warp::sse::reply(events);
            Ok(warp::reply::with_header(reply, "connection", "keep-alive").into_response())
        }
        Err(err) => {
            error!(
                error = %err,
                status = ?err.status_code(),
                request_id = ?err.request_id(),
                "chat completion request failed"
            );
            let body = warp::reply::json(&ErrorBody::internal(&err));
            Ok(warp::reply::with_status(body, StatusCode::INTERNAL_SERVER_ERROR).into_response())
        }
    }
}
