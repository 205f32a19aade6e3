// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fotografiarte API Server
//!
//! Serves the gallery, daily challenge, community feed and profile progress
//! for the Fotografiarte mobile client.

use fotografiarte::{
    config::Config,
    db::{FileStore, KeyValueStore, MemoryStore},
    services::FixedFeedbackScorer,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Fotografiarte API");

    // Progress storage: JSON file if configured, memory otherwise
    let store: Arc<dyn KeyValueStore> = match &config.store_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using file progress store");
            Arc::new(FileStore::new(path))
        }
        None => {
            tracing::warn!("STORE_PATH not set; progress is kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    // Build shared state
    let state = Arc::new(AppState::new(
        config.clone(),
        store,
        Arc::new(FixedFeedbackScorer),
    ));

    // Build router
    let app = fotografiarte::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fotografiarte=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
