//! Insights HTTP Server Binary
//!
//! Loads the cleaned dataset once, derives the app table and serves the
//! dashboard views.
//!
//! # Usage
//!
//! ```bash
//! # Clean the raw export first
//! cargo run --bin clean-dataset -- googleplaystore.csv googleplay_cleaned.csv
//!
//! # Then serve it
//! cargo run --bin insights-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: Cleaned CSV (default: googleplay_cleaned.csv)
//! - `TREND_SEED`: Fixed seed for trend jitter (default: unset, random)
//! - `RUST_LOG`: Log level (default: info)
//!
//! The same settings can be given in `insights.toml`; environment wins.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use app_insights::config::ServerConfig;
use app_insights::http::{create_router, AppState};
use app_insights::io::load_app_table;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting insights HTTP server");

    let config = ServerConfig::load().context("Failed to load server configuration")?;

    let table = load_app_table(&config.data_path).with_context(|| {
        format!(
            "Failed to load cleaned dataset {} (run clean-dataset first)",
            config.data_path.display()
        )
    })?;

    // Create application state
    let state = AppState::with_trend_seed(table, config.trend_seed);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
