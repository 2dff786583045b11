// Local stand-in for the YouTube Data API, used by tests
// Serves canned /videos and /videoCategories replies on 127.0.0.1

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Canned reply for one endpoint
#[derive(Clone)]
pub struct MockReply {
    status: StatusCode,
    body: Value,
}

impl MockReply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn status(code: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            body,
        }
    }
}

#[derive(Default)]
struct Recorded {
    video_queries: Vec<HashMap<String, String>>,
    category_queries: Vec<HashMap<String, String>>,
}

struct MockState {
    videos: MockReply,
    categories: MockReply,
    recorded: Mutex<Recorded>,
}

/// Handle to a running mock; the server lives until the test runtime ends
pub struct MockUpstream {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockUpstream {
    pub fn video_calls(&self) -> usize {
        self.state.recorded.lock().unwrap().video_queries.len()
    }

    pub fn category_calls(&self) -> usize {
        self.state.recorded.lock().unwrap().category_queries.len()
    }

    pub fn last_video_query(&self) -> Option<HashMap<String, String>> {
        self.state.recorded.lock().unwrap().video_queries.last().cloned()
    }

    pub fn last_category_query(&self) -> Option<HashMap<String, String>> {
        self.state.recorded.lock().unwrap().category_queries.last().cloned()
    }
}

async fn videos(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.recorded.lock().unwrap().video_queries.push(query);
    (state.videos.status, Json(state.videos.body.clone()))
}

async fn categories(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.recorded.lock().unwrap().category_queries.push(query);
    (state.categories.status, Json(state.categories.body.clone()))
}

pub async fn spawn(videos_reply: MockReply, categories_reply: MockReply) -> MockUpstream {
    let state = Arc::new(MockState {
        videos: videos_reply,
        categories: categories_reply,
        recorded: Mutex::new(Recorded::default()),
    });

    let app = Router::new()
        .route("/videos", get(videos))
        .route("/videoCategories", get(categories))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Three videos: two from "Lofi Beats", one from "Tech Today"
/// in a category the category list does not know about
pub fn sample_videos() -> Value {
    json!({
        "kind": "youtube#videoListResponse",
        "items": [
            {
                "id": "vid001",
                "snippet": {
                    "title": "Chill mix",
                    "channelTitle": "Lofi Beats",
                    "categoryId": "10",
                    "publishedAt": "2024-06-01T08:00:00Z"
                },
                "statistics": { "viewCount": "1000", "likeCount": "50", "commentCount": "5" },
                "contentDetails": { "duration": "PT15M33S" }
            },
            {
                "id": "vid002",
                "snippet": {
                    "title": "Study mix",
                    "channelTitle": "Lofi Beats",
                    "categoryId": "10",
                    "publishedAt": "2024-06-02T08:00:00Z"
                },
                "statistics": { "viewCount": "3000" },
                "contentDetails": { "duration": "PT1H" }
            },
            {
                "id": "vid003",
                "snippet": {
                    "title": "New phone review",
                    "channelTitle": "Tech Today",
                    "categoryId": "28",
                    "publishedAt": "2024-06-03T08:00:00Z"
                },
                "statistics": { "viewCount": "9000", "likeCount": "0" },
                "contentDetails": { "duration": "PT45S" }
            }
        ]
    })
}

pub fn sample_categories() -> Value {
    json!({
        "kind": "youtube#videoCategoryListResponse",
        "items": [
            { "id": "1", "snippet": { "title": "Film & Animation" } },
            { "id": "10", "snippet": { "title": "Music" } },
            { "id": "20", "snippet": {} }
        ]
    })
}
