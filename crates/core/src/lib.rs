pub mod envelope;
pub mod normalize;
pub mod transport;

pub use envelope::{build_error, build_success, ErrorEnvelope, ErrorKind, ResultEnvelope};
pub use transport::send_json;
pub use normalize::{
    format_timestamp, normalize, FieldKind, FieldRule, NormalizedRecord, Schema, FORUM_SCHEMA,
    NEWS_SCHEMA,
};

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Fixed per-request upstream timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 上流APIへの問い合わせ条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
    pub topic: String,
    pub page_size: u32,
    pub language: String,
    pub sort_by: Option<String>,
}

impl FetchQuery {
    pub fn new(topic: impl Into<String>, page_size: u32, language: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            page_size,
            language: language.into(),
            sort_by: None,
        }
    }

    pub fn sorted_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Timeout, DNS failure, connection reset and the like.
    #[error("{0}")]
    Transport(String),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response")]
    InvalidResponse,
}

#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    async fn fetch(&self, query: &FetchQuery) -> Result<Value, UpstreamError>;
}

/// Fetch one upstream page and wrap the normalized records in a success envelope.
pub async fn fetch_normalized<F: UpstreamFetcher + ?Sized>(
    fetcher: &F,
    query: &FetchQuery,
    schema: &Schema,
) -> Result<ResultEnvelope, UpstreamError> {
    let raw = fetcher.fetch(query).await?;
    let records = normalize(&raw, schema);
    tracing::info!(
        "[{}] fetched {} records for topic '{}'",
        schema.name,
        records.len(),
        query.topic
    );
    Ok(build_success(records))
}
