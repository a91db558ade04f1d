mod chat;
mod config;
mod errors;
mod recommender;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::catalog::Catalog;
use crate::chat::conversation::ConversationStore;
use crate::chat::rule_file::load_catalog;
use crate::chat::{selector, Advisor};
use crate::config::Config;
use crate::recommender::RecommenderClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BölümBul advisor v{}", env!("CARGO_PKG_VERSION"));

    // Chat catalog: rule file if configured, built-in otherwise
    let catalog = match &config.chat_rules_path {
        Some(path) => {
            info!("Loading chat rules from {}", path.display());
            load_catalog(path)?
        }
        None => Catalog::builtin().context("Built-in chat catalog is invalid")?,
    };
    if config.chat_fallback_seed.is_some() {
        info!("Chat fallback selection is seeded");
    }
    let advisor = Advisor::from_catalog(catalog, selector::from_seed(config.chat_fallback_seed))
        .context("Chat catalog is invalid")?;

    // Initialize recommendation client
    let recommender = RecommenderClient::new(
        &config.recommender_url,
        Duration::from_secs(config.recommender_timeout_secs),
    )
    .context("Failed to build recommendation HTTP client")?;
    info!("Recommendation service at {}", recommender.predict_url());

    let conversations = ConversationStore::with_capacity(config.max_conversations);
    info!("Keeping up to {} conversations in memory", conversations.capacity());

    let state = AppState {
        config: config.clone(),
        advisor: Arc::new(advisor),
        conversations,
        recommender: Arc::new(recommender),
    };

    // The chat widget and the interest form call this API from the browser.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
