use async_trait::async_trait;
use news_core::{send_json, FetchQuery, UpstreamError, UpstreamFetcher, DEFAULT_TIMEOUT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const EVERYTHING_PATH: &str = "/v2/everything";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Where the API key travels on the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPlacement {
    /// `?apiKey=...`
    Query,
    /// `X-Api-Key: ...`
    Header,
}

#[derive(Clone, Debug)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl NewsApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Remove trailing slash if present
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
        format!("{}{}", self.base_url, EVERYTHING_PATH)
    }

    /// Bind an API key to this client for one request.
    pub fn authorized<'a>(&'a self, api_key: &'a str, placement: KeyPlacement) -> Authorized<'a> {
        Authorized {
            client: self,
            api_key,
            placement,
        }
    }

    pub async fn search(
        &self,
        api_key: &str,
        placement: KeyPlacement,
        query: &FetchQuery,
    ) -> Result<Value, UpstreamError> {
        let page_size = query.page_size.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("q", query.topic.as_str()),
            ("language", query.language.as_str()),
            ("pageSize", page_size.as_str()),
        ];
        if let Some(sort_by) = query.sort_by.as_deref() {
            params.push(("sortBy", sort_by));
        }

        let mut request = self.client.get(self.endpoint()).timeout(self.timeout);
        match placement {
            KeyPlacement::Query => params.push(("apiKey", api_key)),
            KeyPlacement::Header => request = request.header(API_KEY_HEADER, api_key),
        }

        tracing::debug!("NewsAPI request: q={} pageSize={}", query.topic, query.page_size);
        send_json(request.query(&params)).await
    }
}

pub struct Authorized<'a> {
    client: &'a NewsApiClient,
    api_key: &'a str,
    placement: KeyPlacement,
}

#[async_trait]
impl UpstreamFetcher for Authorized<'_> {
    async fn fetch(&self, query: &FetchQuery) -> Result<Value, UpstreamError> {
        self.client.search(self.api_key, self.placement, query).await
    }
}
