//! OpenSlot.ai landing page host
//!
//! Axum server that serves the compiled Leptos bundle. Email signups go
//! straight from the browser to the subscription service configured at
//! frontend build time (`OPENSLOT_API_URL`); this host does not proxy them.

mod app;
mod config;
mod handlers;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release --dist static");
    }

    let app = app::router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("🚀 OpenSlot.ai landing page on http://{}", config.bind_addr);
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Landing page ({})", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
