// Health and diagnostics handlers
// GET /health and GET /debug/env

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /debug/env
///
/// Reports whether an API key is configured. Never echoes the key.
pub async fn debug_env(State(state): State<AppState>) -> Json<Value> {
    let key = state.config.youtube_api_key.as_deref();
    Json(json!({
        "YOUTUBE_API_KEY_present": key.is_some(),
        "YOUTUBE_API_KEY_length": key.map(str::len).unwrap_or(0),
    }))
}
