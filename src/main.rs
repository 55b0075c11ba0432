//! Process entry point for the GRC Tool API server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grc_server::{config::Config, create_router, llm::OpenAiClient, store::Store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grc_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("GRC Tool API server starting...");
    tracing::info!("Completion endpoint: {}", config.openai_base_url);
    tracing::info!("Model: {}", config.openai_model);

    let llm = OpenAiClient::new(&config)?;

    let state = AppState {
        store: Arc::new(Store::seeded()),
        llm: Arc::new(llm),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
