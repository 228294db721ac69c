pub mod api;

pub use api::{HackerNewsClient, DEFAULT_BASE_URL};

use news_core::{fetch_normalized, FetchQuery, ResultEnvelope, UpstreamError, FORUM_SCHEMA};

pub const DEFAULT_TOPIC: &str = "rust";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn stories_query(topic: &str, page_size: u32) -> FetchQuery {
    FetchQuery::new(topic, page_size, "en")
}

pub async fn get_stories(
    client: &HackerNewsClient,
    query: &FetchQuery,
) -> Result<ResultEnvelope, UpstreamError> {
    fetch_normalized(client, query, &FORUM_SCHEMA).await
}
