use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedRecord;

/// 成功時のレスポンス型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub status: String,
    pub count: usize,
    pub data: Vec<NormalizedRecord>,
}

/// 失敗時のレスポンス型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
}

/// Error categories surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Upstream,
    Validation,
    NotFound,
    MethodNotAllowed,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration Error",
            Self::Upstream => "Bad Gateway",
            Self::Validation => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal Server Error",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration => 500,
            Self::Upstream => 502,
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

pub fn build_success(records: Vec<NormalizedRecord>) -> ResultEnvelope {
    ResultEnvelope {
        status: "success".to_string(),
        count: records.len(),
        data: records,
    }
}

pub fn build_error(kind: ErrorKind, message: impl Into<String>) -> (ErrorEnvelope, u16) {
    let envelope = ErrorEnvelope {
        error: kind.as_str().to_string(),
        message: message.into(),
    };
    (envelope, kind.status_code())
}
