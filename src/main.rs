// Trendboard - YouTube trending analytics backend
// Serves trending data, metrics and a chat interpreter to the dashboard

mod api;
mod error;
mod features;
mod handlers;
mod models;
mod utils;

use std::env;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::AppState;
use crate::utils::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "trendboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    info!("Starting Trendboard...");
    match config.youtube_api_key.as_deref() {
        Some(key) => info!("YOUTUBE_API_KEY present (length {})", key.len()),
        None => warn!("YOUTUBE_API_KEY is not set; /api/trending will fail until it is"),
    }

    // Build HTTP client for API calls
    let http_client = reqwest::Client::builder()
        .user_agent("Trendboard/0.1")
        .timeout(config.request_timeout)
        .build()
        .context("Failed to create HTTP client")?;

    let bind_addr = config.bind_addr;
    let app = handlers::router(AppState::new(http_client, config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Listening on {}", bind_addr);

    // Run with graceful shutdown
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to register Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutting down...");
    });

    if let Err(why) = server.await {
        error!("Server error: {:?}", why);
        return Err(why.into());
    }

    info!("Goodbye!");
    Ok(())
}
