//! # Cookbook Server
//!
//! HTTP shell around the [`cookbook`] crate. Handlers decode JSON, call the
//! cookbook with typed arguments, and map results and errors to status codes.
//!
//! ## Routes
//!
//! - `POST /parse` - normalize a hand-written recipe name
//! - `POST /entry` - register an ingredient or recipe
//! - `GET /summary?name=` - summarize a recipe
//! - `GET /health` - liveness probe

pub mod config;
pub mod handlers;
pub mod handwriting;
pub mod routes;

use anyhow::{Context, Result};
use cookbook::store::MemoryStore;
use cookbook::Cookbook;
use tokio::net::TcpListener;
use tracing::info;

pub use config::{Cli, ServerConfig};
pub use handwriting::parse_handwriting;
pub use routes::create_router;

/// Cookbook state shared by every handler.
pub type SharedCookbook = Cookbook<MemoryStore>;

/// Bind the configured address and serve until interrupted.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let cookbook = Cookbook::in_memory(config.cookbook.clone());
    let app = create_router(cookbook);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, max_depth = config.cookbook.max_depth, "cookbook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
