// YouTube Data API client
// Trending chart and video category lookups

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::TrendingError;
use crate::models::trending::TrendingVideo;
use crate::utils::config::{clamp_limit, normalize_region, Config};
use crate::utils::duration::parse_iso8601_duration;

/// Category id -> human readable name, for one region
pub type CategoryMap = HashMap<String, String>;

/// Thin client over the two YouTube endpoints the dashboard needs.
/// Holds no state between calls besides the pooled HTTP client.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl YouTubeClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_key: config.youtube_api_key.clone(),
            base_url: config.youtube_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        }
    }

    fn api_key(&self) -> Result<&str, TrendingError> {
        self.api_key.as_deref().ok_or(TrendingError::MissingApiKey)
    }

    /// GET `{base}/{path}` and decode the body, surfacing YouTube's
    /// embedded `error` object before anything else
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TrendingError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key()?)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(strip_url)?;

        let status = response.status();
        let body = response.bytes().await.map_err(strip_url)?;

        let value: Value = match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                warn!("YouTube {} returned HTTP {}", path, status);
                return Err(TrendingError::UpstreamStatus {
                    status: status.as_u16(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(message) = embedded_error(&value) {
            warn!("YouTube {} error payload: {}", path, message);
            return Err(TrendingError::UpstreamApi(message));
        }

        if !status.is_success() {
            warn!("YouTube {} returned HTTP {}", path, status);
            return Err(TrendingError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the category id -> name mapping for a region
    pub async fn get_video_categories(&self, region: &str) -> Result<CategoryMap, TrendingError> {
        let region = normalize_region(region);
        let data: CategoryListResponse = self
            .get_json(
                "videoCategories",
                &[("part", "snippet"), ("regionCode", region.as_str())],
            )
            .await?;

        let mapping = build_category_map(data);
        debug!("Loaded {} categories for {}", mapping.len(), region);
        Ok(mapping)
    }

    /// Fetch the mostPopular chart for a region, enriched with category
    /// names and durations. `max_results` is clamped into 1..=50.
    pub async fn fetch_trending_videos(
        &self,
        region: &str,
        max_results: i64,
    ) -> Result<Vec<TrendingVideo>, TrendingError> {
        let region = normalize_region(region);
        let max_results = clamp_limit(max_results).to_string();

        let data: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics"),
                    ("chart", "mostPopular"),
                    ("regionCode", region.as_str()),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        if data.items.is_empty() {
            info!("No trending videos returned for {}", region);
            return Ok(Vec::new());
        }

        let categories = self.get_video_categories(&region).await?;
        let videos = build_trending_videos(data.items, &categories);
        info!("Fetched {} trending videos for {}", videos.len(), region);
        Ok(videos)
    }
}

/// reqwest errors print the request URL, which carries the API key
fn strip_url(err: reqwest::Error) -> TrendingError {
    TrendingError::Transport(err.without_url())
}

/// Extract `error.message` from a YouTube error payload
fn embedded_error(value: &Value) -> Option<String> {
    let error = value.get("error")?;
    if error.is_null() {
        return None;
    }
    Some(
        error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown YouTube API error")
            .to_string(),
    )
}

/// Keep only categories that carry both an id and a title
fn build_category_map(data: CategoryListResponse) -> CategoryMap {
    data.items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.filter(|id| !id.is_empty())?;
            let title = item.snippet?.title.filter(|t| !t.is_empty())?;
            Some((id, title))
        })
        .collect()
}

fn build_trending_videos(items: Vec<VideoItem>, categories: &CategoryMap) -> Vec<TrendingVideo> {
    items
        .into_iter()
        .map(|item| {
            let snippet = item.snippet.unwrap_or_default();
            let stats = item.statistics.unwrap_or_default();
            let category_id = snippet.category_id.unwrap_or_default();
            let duration = item
                .content_details
                .and_then(|c| c.duration)
                .unwrap_or_default();

            TrendingVideo {
                video_id: item.id.unwrap_or_default(),
                title: snippet.title.unwrap_or_default(),
                channel_title: snippet.channel_title.unwrap_or_default(),
                category_name: categories.get(&category_id).cloned(),
                category_id,
                published_at: snippet.published_at.unwrap_or_default(),
                view_count: stat_count(&stats, "viewCount").unwrap_or(0),
                like_count: stat_count(&stats, "likeCount"),
                comment_count: stat_count(&stats, "commentCount"),
                duration_seconds: parse_iso8601_duration(&duration),
            }
        })
        .collect()
}

/// Statistics arrive as decimal strings. A present but unreadable
/// value counts as 0; an absent key stays None.
fn stat_count(stats: &Map<String, Value>, key: &str) -> Option<u64> {
    stats.get(key).map(|value| match value {
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        Value::Number(n) => n.as_u64().unwrap_or(0),
        _ => 0,
    })
}

// YouTube API response structures
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryListResponse {
    items: Vec<CategoryItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryItem {
    id: Option<String>,
    snippet: Option<CategorySnippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategorySnippet {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoListResponse {
    items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoItem {
    id: Option<String>,
    snippet: Option<VideoSnippet>,
    statistics: Option<Map<String, Value>>,
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoSnippet {
    title: Option<String>,
    channel_title: Option<String>,
    category_id: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    duration: Option<String>,
}
