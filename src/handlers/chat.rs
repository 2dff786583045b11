// Chat handler
// POST /api/chat turns a chat line into dashboard parameters

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use super::AppState;
use crate::features::chat_interpreter::{interpret_command, InterpretedCommand};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub default_region: Option<String>,
    pub default_limit: Option<i64>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<InterpretedCommand> {
    // Blank region and zero limit mean "not set", same as omitting them
    let default_region = req
        .default_region
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(&state.config.default_region);
    let default_limit = req
        .default_limit
        .filter(|&n| n != 0)
        .unwrap_or(i64::from(state.config.default_limit));

    let command = interpret_command(&req.message, Some(default_region), Some(default_limit));
    debug!(
        "Chat {:?} -> region={} limit={}",
        req.message, command.region, command.limit
    );

    Json(command)
}
