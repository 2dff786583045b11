// Trending report: fetch a region's chart and summarize it

use chrono::Utc;
use tracing::info;

use crate::api::youtube::YouTubeClient;
use crate::error::TrendingError;
use crate::models::stats::compute_trending_metrics;
use crate::models::trending::TrendingReport;
use crate::utils::config::{clamp_limit, normalize_region};

/// Fetch up to `limit` trending videos for `region` and compute their metrics.
///
/// An empty chart yields an empty report, not an error.
pub async fn fetch_trending(
    client: &YouTubeClient,
    region: &str,
    limit: i64,
) -> Result<TrendingReport, TrendingError> {
    let region = normalize_region(region);
    info!("Loading top {} trending videos for {}", clamp_limit(limit), region);

    let videos = client.fetch_trending_videos(&region, limit).await?;
    let metrics = compute_trending_metrics(&videos, &region);

    Ok(TrendingReport {
        region,
        videos,
        metrics,
        fetched_at: Utc::now(),
    })
}
