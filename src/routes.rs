// Route definitions

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::llm::ChatProvider;

pub fn configure_routes(
    provider: Arc<dyn ChatProvider>,
    static_dir: String,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let with_provider = warp::any().map(move || provider.clone());

    // POST /api/chat
    let chat = warp::path("api")
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_provider)
        .and(warp::body::json())
        .and_then(handlers::chat_handler);

    // Static assets at /
    let assets = warp::fs::dir(static_dir);

    chat.or(assets).with(warp::log::custom(|info| {
        tracing::debug!(
            method = %info.method(),
            path = %info.path(),
            status = info.status().as_u16(),
            "request"
        );
    }))
}
