use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub const MOCK_KEY: &str = "mock-news-key";

/// How the mock upstreams answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ok,
    Error,
}

#[derive(Clone)]
struct MockState {
    mode: Mode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Query parameters plus whether the key came in the `X-Api-Key` header.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub params: HashMap<String, String>,
    pub header_key: Option<String>,
}

pub struct MockServer {
    pub port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub async fn start(mode: Mode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            mode,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v2/everything", get(handle_everything))
            .route("/api/v1/search", get(handle_search))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
                .unwrap();
        });

        MockServer {
            port,
            requests,
            shutdown_tx: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn record(state: &MockState, path: &'static str, headers: &HeaderMap, params: HashMap<String, String>) {
    let header_key = headers
        .get("x-api-key")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        path,
        params,
        header_key,
    });
}

async fn handle_everything(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/v2/everything", &headers, params.clone());

    let key_ok = params.get("apiKey").map(String::as_str) == Some(MOCK_KEY)
        || headers.get("x-api-key").and_then(|h| h.to_str().ok()) == Some(MOCK_KEY);
    if !key_ok {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"status": "error", "code": "apiKeyInvalid"})),
        )
            .into_response();
    }
    if state.mode == Mode::Error {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    Json(serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "ign", "name": "IGN"},
                "author": "Someone",
                "title": "New <Console> Announced",
                "description": "Specs & price",
                "url": "https://ign.example/console",
                "urlToImage": "https://ign.example/console.png",
                "publishedAt": "2025-10-01T08:15:00Z",
                "content": "..."
            },
            {
                "source": {"id": null, "name": "Kotaku"},
                "title": "Patch notes",
                "url": "https://kotaku.example/patch",
                "publishedAt": "2025-10-01T09:00:00+09:00"
            }
        ]
    }))
    .into_response()
}

async fn handle_search(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/api/v1/search", &headers, params);

    if state.mode == Mode::Error {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }

    Json(serde_json::json!({
        "hits": [
            {
                "title": "Rust 2.0",
                "url": "https://rust.example/2",
                "author": "ferris",
                "points": 512,
                "created_at": "2025-09-30T12:00:00.000Z",
                "objectID": "1"
            },
            {
                "title": null,
                "story_title": "Comment thread",
                "story_url": "https://story.example/t",
                "author": "crab",
                "points": null,
                "created_at": "2025-09-30T13:30:00.000Z",
                "objectID": "2"
            }
        ],
        "nbHits": 2
    }))
    .into_response()
}
