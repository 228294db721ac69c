use crate::helpers::client::TestClient;
use crate::helpers::mock_server::{MockServer, Mode};
use axum::http::StatusCode;
use serde_json::json;

/// 観点: キー無しでも Hacker News は取得できるか
#[tokio::test]
async fn test_hacker_news_success_without_key() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), None);

    let res = client.get("/api/hacker-news").await;
    assert_eq!(res.status, StatusCode::OK);

    let body = res.json();
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["data"][0],
        json!({
            "title": "Rust 2.0",
            "url": "https://rust.example/2",
            "author": "ferris",
            "points": 512,
            "created_at": "2025-09-30 12:00 UTC"
        })
    );
    assert_eq!(body["data"][1]["title"], "Comment thread");
    assert_eq!(body["data"][1]["url"], "https://story.example/t");
    assert!(body["data"][1].get("points").is_none());

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/api/v1/search");
    assert_eq!(requests[0].params["query"], "rust");
    assert_eq!(requests[0].params["tags"], "story");
    assert_eq!(requests[0].params["hitsPerPage"], "10");
}

#[tokio::test]
async fn test_hacker_news_topic_override() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), None);

    client.get("/api/hacker-news?q=tokio&limit=5").await;
    let requests = mock.requests();
    assert_eq!(requests[0].params["query"], "tokio");
    assert_eq!(requests[0].params["hitsPerPage"], "5");
}

#[tokio::test]
async fn test_hacker_news_upstream_failure() {
    let mock = MockServer::start(Mode::Error).await;
    let client = TestClient::new(&mock.base_url(), None);

    let res = client.get("/api/hacker-news").await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(res.json()["message"], "Failed to fetch Hacker News stories");
    assert!(!res.text.contains("maintenance"));
}

#[tokio::test]
async fn test_hacker_news_page() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), None);

    let res = client.get("/hacker-news").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.text.contains("Rust 2.0"));
    assert!(res.text.contains("ferris"));
    assert_eq!(res.headers["cache-control"], "no-store");
}
