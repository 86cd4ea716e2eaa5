//! Mailroom - A mock mailbox HTTP backend
//!
//! This is the main entry point for the Mailroom server.

use anyhow::{Context, Result};
use log::{error, info};
use mail::{EmailStore, InMemoryEmailStore};
use std::sync::Arc;

mod api;
mod routes;
mod settings;
mod state;

use settings::Settings;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let settings = Settings::load().context("Failed to load server settings")?;

    let store: Arc<dyn EmailStore> = if settings.seed_data {
        Arc::new(InMemoryEmailStore::seeded()?)
    } else {
        Arc::new(InMemoryEmailStore::new())
    };
    info!("Mailbox ready with {} emails", store.count_emails()?);

    let app = routes::router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_addr))?;
    info!("Mailroom listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Mailroom stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
