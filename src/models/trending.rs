// Trending video models
// Field names are what the dashboard reads, keep them snake_case

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stats::TrendingMetrics;

/// One video from a region's mostPopular chart, enriched with
/// its category name and parsed duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingVideo {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub category_id: String,
    pub category_name: Option<String>,
    /// Opaque RFC 3339 string as reported upstream
    pub published_at: String,
    pub view_count: u64,
    /// None when YouTube omits the statistic (hidden likes), not when it is zero
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub duration_seconds: u64,
}

/// Result of a single trending fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingReport {
    pub region: String,
    pub videos: Vec<TrendingVideo>,
    pub metrics: TrendingMetrics,
    pub fetched_at: DateTime<Utc>,
}

impl TrendingReport {
    /// Zero videos is a valid outcome; callers decide whether it means "not found"
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
