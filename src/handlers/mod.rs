// HTTP surface for the dashboard frontend
// Routes, shared state and the CORS policy for the browser client

pub mod chat;
pub mod health;
pub mod trending;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::api::youtube::YouTubeClient;
use crate::utils::config::Config;

/// State shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub youtube: YouTubeClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, config: Config) -> Self {
        Self {
            youtube: YouTubeClient::new(http_client, &config),
            config: Arc::new(config),
        }
    }
}

/// The dashboard is hosted on another origin and sends credentials, so
/// methods and headers are mirrored from the preflight instead of `*`.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/health", get(health::health))
        .route("/debug/env", get(health::debug_env))
        .route("/api/trending", get(trending::get_trending))
        .route("/api/chat", post(chat::chat))
        .layer(cors)
        .with_state(state)
}
