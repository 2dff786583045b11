// Error types for the trending pipeline and the HTTP layer

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures of a trending fetch. Empty results are not errors.
#[derive(Debug, Error)]
pub enum TrendingError {
    /// No API key was configured
    #[error("YOUTUBE_API_KEY is not set in environment.")]
    MissingApiKey,

    /// The request never produced a usable response
    #[error("Request to YouTube failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the JSON shape we expected
    #[error("Unexpected response from YouTube: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success status without an error payload we could read
    #[error("YouTube responded with HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// YouTube answered with an `error` object
    #[error("YouTube API error: {0}")]
    UpstreamApi(String),
}

impl TrendingError {
    /// True for failures that stem from our own configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, TrendingError::MissingApiKey)
    }
}

/// Errors returned to HTTP callers as `{"detail": ...}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Trending(TrendingError),
}

impl From<TrendingError> for ApiError {
    fn from(err: TrendingError) -> Self {
        ApiError::Trending(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Trending(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
