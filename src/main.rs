//! LAMFO Website Backend server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lamfo_site_backend::chat::ChatRelay;
use lamfo_site_backend::config::Config;
use lamfo_site_backend::content::ContentStore;
use lamfo_site_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting LAMFO Website Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Cached content is validated here so broken files stop the server before it listens
    let content = if config.content_reload {
        tracing::info!("Content reload enabled; files are read on every request");
        ContentStore::reloading(&config.content_dir)
    } else {
        ContentStore::cached(&config.content_dir)?
    };
    tracing::info!("Content directory: {:?}", content.content_dir());

    let chat = ChatRelay::new(config.chat_api_url.clone(), config.chat_timeout)?;
    if !chat.is_enabled() {
        tracing::warn!("No chat service configured (LAB_CHAT_API_URL). Chat relay is disabled!");
    }

    // Create application state
    let state = AppState {
        content: Arc::new(content),
        chat: Arc::new(chat),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
