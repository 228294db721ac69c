use crate::pages;
use axum::response::{Html, Json};
use chrono::SecondsFormat;
use serde_json::{json, Value};

pub async fn documentation() -> Html<String> {
    Html(pages::documentation())
}

/// Always 200: does not touch configuration or upstreams.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "API is running successfully",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

pub async fn info() -> Json<Value> {
    Json(json!({
        "name": "News Proxy API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Fetch the latest gaming news and Hacker News stories as a uniform JSON envelope",
        "endpoints": {
            "health": "/api/health",
            "info": "/api/info",
            "gaming_news": "/api/gaming-news",
            "hacker_news": "/api/hacker-news",
            "users": "/api/users",
            "news": "/api/news",
            "debug_env": "/api/debug-env",
        },
    }))
}
