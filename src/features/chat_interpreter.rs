// Rule-based chat interpreter
// Turns "Top 20 trending videos in US" into (region, limit)

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::config::{clamp_limit, normalize_region, DEFAULT_LIMIT, MAX_RESULTS, REGION_PHRASES};

static NUMBER_TOKEN: OnceLock<Regex> = OnceLock::new();

fn number_token() -> &'static Regex {
    NUMBER_TOKEN.get_or_init(|| Regex::new(r"\b([0-9]{1,2})\b").expect("number pattern is valid"))
}

/// What the dashboard should load next, plus a reply to show in the chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedCommand {
    pub reply: String,
    pub region: String,
    pub limit: u32,
}

/// First region phrase contained in the message, in table order
fn detect_region(lower: &str) -> Option<&'static str> {
    REGION_PHRASES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
        .map(|(_, code)| *code)
}

/// Rightmost standalone 1-2 digit number that is a usable page size
fn detect_limit(text: &str) -> Option<u32> {
    let tokens: Vec<&str> = number_token()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    tokens
        .into_iter()
        .rev()
        .filter_map(|token| token.parse::<i64>().ok())
        .find(|n| (1..=MAX_RESULTS).contains(n))
        .map(|n| n as u32)
}

fn build_reply(region: &str, limit: u32) -> String {
    format!(
        "Okay, I’ll load the top {} trending YouTube videos for region {}. \
         I’ll show basic metrics like total views, average views and the top channels.",
        limit, region
    )
}

/// Interpret a chat message. Never fails: anything unrecognised falls
/// back to the supplied defaults, then to US / 25.
pub fn interpret_command(
    message: &str,
    default_region: Option<&str>,
    default_limit: Option<i64>,
) -> InterpretedCommand {
    let text = message.trim();
    let lower = text.to_lowercase();

    let region = match detect_region(&lower) {
        Some(code) => code.to_string(),
        None => normalize_region(default_region.unwrap_or_default()),
    };

    // A zero default means "not set", same as omitting it
    let fallback_limit = default_limit.filter(|&n| n != 0).unwrap_or(DEFAULT_LIMIT);
    let limit = detect_limit(text).unwrap_or_else(|| clamp_limit(fallback_limit));

    InterpretedCommand {
        reply: build_reply(&region, limit),
        region,
        limit,
    }
}
