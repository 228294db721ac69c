use crate::error::AppError;
use crate::handlers::common::{resolve_topic, topic_params, PageError};
use crate::pages;
use crate::state::{SharedState, TopicQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Json},
};
use news_core::ResultEnvelope;

async fn fetch_stories(
    state: &SharedState,
    params: &TopicQuery,
) -> Result<ResultEnvelope, AppError> {
    let (topic, limit) = resolve_topic(
        params,
        hackernews::DEFAULT_TOPIC,
        hackernews::DEFAULT_PAGE_SIZE,
        hackernews::MAX_PAGE_SIZE,
    )?;
    let query = hackernews::stories_query(&topic, limit);

    hackernews::get_stories(&state.hackernews, &query)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch Hacker News stories", e))
}

pub async fn hacker_news_api(
    State(state): State<SharedState>,
    params: Result<Query<TopicQuery>, QueryRejection>,
) -> Result<Json<ResultEnvelope>, AppError> {
    Ok(Json(fetch_stories(&state, &topic_params(params)?).await?))
}

pub async fn hacker_news_page(
    State(state): State<SharedState>,
    params: Result<Query<TopicQuery>, QueryRejection>,
) -> Result<Html<String>, PageError> {
    let envelope = fetch_stories(&state, &topic_params(params)?).await?;
    Ok(Html(pages::stories("Hacker News", &envelope.data)))
}
