//! Assistant Relay server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use assistant_relay::adapters::ai::{OpenAiAssistants, OpenAiAssistantsConfig};
use assistant_relay::adapters::http::{chat_router, ChatAppState};
use assistant_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,assistant_relay=debug")),
        )
        .init();

    // Configuration errors are fatal; nothing binds until these hold.
    let config = AppConfig::load()?;
    config.validate()?;

    let provider = OpenAiAssistants::new(
        OpenAiAssistantsConfig::new(config.openai.api_key.clone())
            .with_base_url(config.openai.base_url.clone())
            .with_timeout(config.openai.timeout()),
    );

    let state = ChatAppState::new(Arc::new(provider), config.openai.assistant_id.clone());
    let app = chat_router(state);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on port {}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
