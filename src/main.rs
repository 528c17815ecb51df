use std::sync::Arc;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use chat_relay::config::Settings;
use chat_relay::llm::{ChatProvider, OpenAiClient, OpenAiModel};
use chat_relay::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_relay=debug,info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = match OpenAiClient::new(
        settings.api_key.clone(),
        settings.base_url.clone(),
        OpenAiModel::Gpt4oMini,
    ) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to create completion client");
            std::process::exit(1);
        }
    };
    let provider: Arc<dyn ChatProvider> = Arc::new(client);

    let routes = configure_routes(provider, settings.static_dir.clone());

    info!(
        "Starting server on http://127.0.0.1:{}",
        settings.port
    );
    debug!(
        base_url = %settings.base_url,
        api_key = %settings.masked_api_key(),
        static_dir = %settings.static_dir,
        "provider configuration"
    );

    warp::serve(routes).run(([127, 0, 0, 1], settings.port)).await;
}
