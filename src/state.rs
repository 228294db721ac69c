use crate::config::AppConfig;
use hackernews::HackerNewsClient;
use newsapi::NewsApiClient;
use serde::Deserialize;
use std::sync::Arc;
use users::UserStore;

pub type SharedState = AppState;

/// Optional overrides accepted by the news routes.
#[derive(Debug, Default, Deserialize)]
pub struct TopicQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub news: NewsApiClient,
    pub hackernews: HackerNewsClient,
    pub users: UserStore,
}

impl AppState {
    pub fn new(config: AppConfig, http_client: reqwest::Client) -> Self {
        let news = NewsApiClient::new(http_client.clone(), config.news_api_url.clone());
        let hackernews = HackerNewsClient::new(http_client, config.hackernews_api_url.clone());
        Self {
            config: Arc::new(config),
            news,
            hackernews,
            users: UserStore::seeded(),
        }
    }
}
