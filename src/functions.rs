//! Standalone request functions for function-per-invocation hosting.
//!
//! Each function takes its inputs explicitly and returns a complete
//! [`FunctionResponse`], so it can be mounted on the router or called by a
//! serverless shim without going through axum extractors.

use crate::config::AppConfig;
use crate::cors;
use crate::error::AppError;
use crate::handlers::common::topic_params;
use crate::state::{SharedState, TopicQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use news_core::FetchQuery;
use newsapi::{KeyPlacement, NewsApiClient};
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_QUERY: &str = "vercel";
pub const LANGUAGE: &str = "ja";
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug)]
pub struct FunctionResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl FunctionResponse {
    fn empty(status: StatusCode, config: &AppConfig) -> Self {
        Self {
            status,
            headers: cors::headers(config.resolve_allowed_origin()),
            body: String::new(),
        }
    }

    fn json<T: Serialize>(status: StatusCode, config: &AppConfig, value: &T) -> Self {
        let mut response = Self::empty(status, config);
        response.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response.body = match serde_json::to_string(value) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to serialize function response: {}", e);
                response.status = StatusCode::INTERNAL_SERVER_ERROR;
                r#"{"error":"Internal Server Error","message":"An internal error occurred"}"#
                    .to_string()
            }
        };
        response
    }

    fn from_error(config: &AppConfig, err: AppError) -> Self {
        let (envelope, _) = news_core::build_error(err.kind(), err.public_message());
        Self::json(err.status(), config, &envelope)
    }
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

/// Empty 204 with the CORS headers; answers every `OPTIONS` request.
pub fn preflight(config: &AppConfig) -> FunctionResponse {
    FunctionResponse::empty(StatusCode::NO_CONTENT, config)
}

/// News search with the key sent as `X-Api-Key`.
pub async fn news(config: &AppConfig, client: &NewsApiClient, q: Option<&str>) -> FunctionResponse {
    let api_key = match config.resolve_api_key() {
        Ok(key) => key,
        Err(e) => return FunctionResponse::from_error(config, e.into()),
    };

    let topic = q.map(str::trim).filter(|q| !q.is_empty()).unwrap_or(DEFAULT_QUERY);
    let query = FetchQuery::new(topic, PAGE_SIZE, LANGUAGE);

    match newsapi::get_articles(client, api_key, KeyPlacement::Header, &query).await {
        Ok(envelope) => FunctionResponse::json(StatusCode::OK, config, &envelope),
        Err(e) => FunctionResponse::from_error(config, AppError::upstream("Failed to fetch news", e)),
    }
}

/// Reports whether the news key is configured. The value itself is never
/// written to the response.
pub fn debug_env(config: &AppConfig) -> FunctionResponse {
    let len = config.news_api_key.as_deref().map_or(0, |k| k.chars().count());
    FunctionResponse::json(
        StatusCode::OK,
        config,
        &json!({ "hasKey": len > 0, "len": len }),
    )
}

pub async fn news_handler(
    State(state): State<SharedState>,
    params: Result<Query<TopicQuery>, QueryRejection>,
) -> FunctionResponse {
    match topic_params(params) {
        Ok(params) => news(&state.config, &state.news, params.q.as_deref()).await,
        Err(e) => FunctionResponse::from_error(&state.config, e),
    }
}

pub async fn debug_env_handler(State(state): State<SharedState>) -> FunctionResponse {
    debug_env(&state.config)
}
