use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use news_core::{build_error, ErrorKind, UpstreamError};
use tracing::error;
use users::UserError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum AppError {
    Configuration(String),
    Upstream {
        message: String,
        source: UpstreamError,
    },
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Conflict(String),
    Internal(anyhow::Error),
}

impl AppError {
    /// Upstream failure with a client-facing message; the cause is logged.
    pub fn upstream(message: impl Into<String>, source: UpstreamError) -> Self {
        AppError::Upstream {
            message: message.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Configuration(_) => ErrorKind::Configuration,
            AppError::Upstream { .. } => ErrorKind::Upstream,
            AppError::BadRequest(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message shown to the client. Logs the details that are not shown.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Configuration(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Upstream { message, source } => {
                error!("{}: {}", message, source);
                message.clone()
            }
            AppError::Internal(err) => {
                error!("Internal error: {:#}", err);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (body, _) = build_error(self.kind(), self.public_message());
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Conflict(_) => AppError::Conflict(err.to_string()),
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

// Anyhow conversion
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
