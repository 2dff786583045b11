// Trending handler
// GET /api/trending?region=US&limit=25

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use super::AppState;
use crate::error::ApiError;
use crate::features::trending_report::fetch_trending;
use crate::models::trending::TrendingReport;

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub region: Option<String>,
    /// Out-of-range values are clamped, not rejected
    pub limit: Option<i64>,
}

pub async fn get_trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<TrendingReport>, ApiError> {
    let region = query.region.as_deref().unwrap_or(&state.config.default_region);
    let limit = query
        .limit
        .unwrap_or(i64::from(state.config.default_limit));

    let report = fetch_trending(&state.youtube, region, limit)
        .await
        .map_err(|e| {
            if e.is_configuration() {
                error!("Trending fetch misconfigured: {}", e);
            } else {
                warn!("Trending fetch failed for {}: {}", region, e);
            }
            ApiError::from(e)
        })?;

    if report.is_empty() {
        return Err(ApiError::NotFound("No trending videos found.".to_string()));
    }

    Ok(Json(report))
}
