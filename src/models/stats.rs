// Summary statistics over a trending set

use serde::{Deserialize, Serialize};

use super::trending::TrendingVideo;

/// Aggregated view of one trending fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingMetrics {
    pub region: String,
    pub total_videos: usize,
    pub total_views: u64,
    pub avg_views: f64,
    pub median_views: f64,
    pub top_channel_by_videos: Option<String>,
    pub top_channel_video_count: usize,
    pub top_channel_by_views: Option<String>,
    pub top_channel_total_views: u64,
}

impl TrendingMetrics {
    /// Metrics for a region with no videos
    pub fn empty(region: &str) -> Self {
        Self {
            region: region.to_uppercase(),
            total_videos: 0,
            total_views: 0,
            avg_views: 0.0,
            median_views: 0.0,
            top_channel_by_videos: None,
            top_channel_video_count: 0,
            top_channel_by_views: None,
            top_channel_total_views: 0,
        }
    }
}

/// Per-channel tally, kept in first-seen order
#[derive(Debug)]
struct ChannelTally<'a> {
    channel: &'a str,
    videos: usize,
    views: u64,
}

fn tally_channels(videos: &[TrendingVideo]) -> Vec<ChannelTally<'_>> {
    let mut tallies: Vec<ChannelTally<'_>> = Vec::new();
    for video in videos {
        match tallies.iter_mut().find(|t| t.channel == video.channel_title) {
            Some(tally) => {
                tally.videos += 1;
                tally.views = tally.views.saturating_add(video.view_count);
            }
            None => tallies.push(ChannelTally {
                channel: &video.channel_title,
                videos: 1,
                views: video.view_count,
            }),
        }
    }
    tallies
}

/// Pick the tally with the largest key. Ties go to the channel seen first.
fn first_max_by<'a, 'b, K: Ord>(
    tallies: &'b [ChannelTally<'a>],
    key: impl Fn(&ChannelTally<'a>) -> K,
) -> Option<&'b ChannelTally<'a>> {
    let mut best: Option<&ChannelTally<'a>> = None;
    for tally in tallies {
        match best {
            Some(current) if key(tally) <= key(current) => {}
            _ => best = Some(tally),
        }
    }
    best
}

fn median(values: &mut [u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    } else {
        values[mid] as f64
    }
}

/// Reduce a trending set to summary metrics
pub fn compute_trending_metrics(videos: &[TrendingVideo], region: &str) -> TrendingMetrics {
    if videos.is_empty() {
        return TrendingMetrics::empty(region);
    }

    let total_views = videos
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(v.view_count));
    let avg_views = total_views as f64 / videos.len() as f64;

    let mut views: Vec<u64> = videos.iter().map(|v| v.view_count).collect();
    let median_views = median(&mut views);

    let tallies = tally_channels(videos);
    let by_videos = first_max_by(&tallies, |t| t.videos);
    let by_views = first_max_by(&tallies, |t| t.views);

    TrendingMetrics {
        region: region.to_uppercase(),
        total_videos: videos.len(),
        total_views,
        avg_views,
        median_views,
        top_channel_by_videos: by_videos.map(|t| t.channel.to_string()),
        top_channel_video_count: by_videos.map(|t| t.videos).unwrap_or(0),
        top_channel_by_views: by_views.map(|t| t.channel.to_string()),
        top_channel_total_views: by_views.map(|t| t.views).unwrap_or(0),
    }
}
