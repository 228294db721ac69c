use crate::error::AppError;
use crate::handlers::common::{resolve_topic, topic_params, PageError};
use crate::pages;
use crate::state::{SharedState, TopicQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Json},
};
use news_core::ResultEnvelope;
use newsapi::KeyPlacement;

const FETCH_FAILED: &str = "Failed to fetch gaming news";

async fn fetch_gaming_news(
    state: &SharedState,
    params: &TopicQuery,
) -> Result<ResultEnvelope, AppError> {
    let api_key = state.config.resolve_api_key()?;

    let (topic, limit) = resolve_topic(
        params,
        newsapi::GAMING_TOPIC,
        newsapi::DEFAULT_PAGE_SIZE,
        newsapi::MAX_PAGE_SIZE,
    )?;
    let query = newsapi::latest_query(topic, limit);

    newsapi::get_articles(&state.news, api_key, KeyPlacement::Query, &query)
        .await
        .map_err(|e| AppError::upstream(FETCH_FAILED, e))
}

pub async fn gaming_news_api(
    State(state): State<SharedState>,
    params: Result<Query<TopicQuery>, QueryRejection>,
) -> Result<Json<ResultEnvelope>, AppError> {
    let envelope = fetch_gaming_news(&state, &topic_params(params)?).await?;
    Ok(Json(envelope))
}

pub async fn gaming_news_page(
    State(state): State<SharedState>,
    params: Result<Query<TopicQuery>, QueryRejection>,
) -> Result<Html<String>, PageError> {
    let envelope = fetch_gaming_news(&state, &topic_params(params)?).await?;
    Ok(Html(pages::articles("Gaming News", &envelope.data)))
}
