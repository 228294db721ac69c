use crate::error::AppError;
use crate::pages;
use crate::state::TopicQuery;
use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{Html, IntoResponse, Response},
};

/// Unwrap `?q=&limit=`, turning a rejected query string into a 400 envelope.
pub fn topic_params(params: Result<Query<TopicQuery>, QueryRejection>) -> Result<TopicQuery, AppError> {
    params.map(|Query(params)| params).map_err(|rejection| {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::BadRequest("The request was invalid".to_string())
    })
}

/// Resolve `?q=` and `?limit=` against route defaults.
pub fn resolve_topic(
    params: &TopicQuery,
    default_topic: &str,
    default_limit: u32,
    max_limit: u32,
) -> Result<(String, u32), AppError> {
    let topic = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(default_topic)
        .to_string();

    let limit = match params.limit.as_deref().map(str::trim) {
        None | Some("") => default_limit,
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if (1..=max_limit).contains(&n) => n,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "limit must be an integer between 1 and {}",
                    max_limit
                )))
            }
        },
    };

    Ok((topic, limit))
}

/// Error rendered as the HTML error page instead of the JSON envelope.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.public_message();
        (status, Html(pages::error(&message))).into_response()
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("The requested resource was not found".to_string())
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("The requested method is not allowed for this resource".to_string())
}
