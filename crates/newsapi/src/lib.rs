pub mod api;

pub use api::{Authorized, KeyPlacement, NewsApiClient, DEFAULT_BASE_URL};

use news_core::{fetch_normalized, FetchQuery, ResultEnvelope, UpstreamError, NEWS_SCHEMA};

pub const GAMING_TOPIC: &str = "gaming";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// The query behind the gaming news routes.
pub fn gaming_query() -> FetchQuery {
    latest_query(GAMING_TOPIC, DEFAULT_PAGE_SIZE)
}

/// English articles, newest first.
pub fn latest_query(topic: impl Into<String>, page_size: u32) -> FetchQuery {
    FetchQuery::new(topic, page_size, "en").sorted_by("publishedAt")
}

/// Fetch one page of articles and normalize them.
pub async fn get_articles(
    client: &NewsApiClient,
    api_key: &str,
    placement: KeyPlacement,
    query: &FetchQuery,
) -> Result<ResultEnvelope, UpstreamError> {
    let fetcher = client.authorized(api_key, placement);
    fetch_normalized(&fetcher, query, &NEWS_SCHEMA).await
}
