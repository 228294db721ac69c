use async_trait::async_trait;
use news_core::{send_json, FetchQuery, UpstreamError, UpstreamFetcher, DEFAULT_TIMEOUT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com";
const SEARCH_PATH: &str = "/api/v1/search";

/// Algolia's public Hacker News search. No key required.
#[derive(Clone, Debug)]
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HackerNewsClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl UpstreamFetcher for HackerNewsClient {
    // Algolia has no language filter, so `query.language` is not sent
    async fn fetch(&self, query: &FetchQuery) -> Result<Value, UpstreamError> {
        let hits_per_page = query.page_size.to_string();
        let request = self
            .client
            .get(self.endpoint())
            .timeout(self.timeout)
            .query(&[
                ("query", query.topic.as_str()),
                ("tags", "story"),
                ("hitsPerPage", hits_per_page.as_str()),
            ]);

        tracing::debug!("Algolia request: query={} hitsPerPage={}", query.topic, hits_per_page);
        send_json(request).await
    }
}
