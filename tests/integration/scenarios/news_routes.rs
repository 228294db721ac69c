use crate::helpers::client::TestClient;
use crate::helpers::mock_server::{MockServer, Mode, MOCK_KEY};
use axum::http::StatusCode;
use serde_json::json;

/// 観点: /api/gaming-news が上流の記事を整形して返すか
#[tokio::test]
async fn test_gaming_news_success() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), Some(MOCK_KEY));

    let res = client.get("/api/gaming-news").await;
    assert_eq!(res.status, StatusCode::OK);

    let body = res.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["data"][0],
        json!({
            "title": "New <Console> Announced",
            "description": "Specs & price",
            "url": "https://ign.example/console",
            "image": "https://ign.example/console.png",
            "publishedAt": "2025-10-01 08:15 UTC",
            "source": "IGN"
        })
    );
    // +09:00 is converted to UTC; missing fields are omitted
    assert_eq!(body["data"][1]["publishedAt"], "2025-10-01 00:00 UTC");
    assert!(body["data"][1].get("description").is_none());
    assert_eq!(res.headers["access-control-allow-origin"], "https://frontend.example");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let params = &requests[0].params;
    assert_eq!(params["q"], "gaming");
    assert_eq!(params["language"], "en");
    assert_eq!(params["sortBy"], "publishedAt");
    assert_eq!(params["pageSize"], "10");
    assert_eq!(params["apiKey"], MOCK_KEY);
    assert!(requests[0].header_key.is_none());
}

#[tokio::test]
async fn test_gaming_news_topic_and_limit_overrides() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), Some(MOCK_KEY));

    let res = client.get("/api/gaming-news?q=zelda&limit=3").await;
    assert_eq!(res.status, StatusCode::OK);

    let requests = mock.requests();
    assert_eq!(requests[0].params["q"], "zelda");
    assert_eq!(requests[0].params["pageSize"], "3");
}

/// 観点: 上流エラー時に 502 と固定メッセージを返し、詳細を漏らさないか
#[tokio::test]
async fn test_gaming_news_upstream_failure_is_bad_gateway() {
    let mock = MockServer::start(Mode::Error).await;
    let client = TestClient::new(&mock.base_url(), Some(MOCK_KEY));

    let res = client.get("/api/gaming-news").await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        res.json(),
        json!({"error": "Bad Gateway", "message": "Failed to fetch gaming news"})
    );
    assert!(!res.text.contains("exploded"));
}

#[tokio::test]
async fn test_rejected_key_is_bad_gateway() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), Some("wrong-key"));

    let res = client.get("/api/gaming-news").await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
}

/// 観点: キー未設定なら上流へのリクエスト自体が発生しないか
#[tokio::test]
async fn test_missing_key_skips_upstream() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), None);

    let res = client.get("/api/gaming-news").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json()["error"], "Configuration Error");
    assert!(mock.requests().is_empty());
}

/// 観点: HTML ページでもタイトルがエスケープされているか
#[tokio::test]
async fn test_gaming_news_page_is_escaped_html() {
    let mock = MockServer::start(Mode::Ok).await;
    let client = TestClient::new(&mock.base_url(), Some(MOCK_KEY));

    let res = client.get("/gaming-news").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.headers["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(res.text.contains("New &lt;Console&gt; Announced"));
    assert!(!res.text.contains("<Console>"));
    assert!(res.text.contains("https://ign.example/console"));
}

#[tokio::test]
async fn test_gaming_news_page_error_keeps_status() {
    let mock = MockServer::start(Mode::Error).await;
    let client = TestClient::new(&mock.base_url(), Some(MOCK_KEY));

    let res = client.get("/gaming-news").await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert!(res.text.contains("Failed to fetch gaming news"));
}
