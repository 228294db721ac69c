use std::fmt;

pub const NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";
pub const SESSION_SECRET: &str = "SESSION_SECRET";
pub const NEWS_API_URL: &str = "NEWS_API_URL";
pub const HACKERNEWS_API_URL: &str = "HACKERNEWS_API_URL";
pub const PORT: &str = "PORT";

const DEFAULT_ORIGIN: &str = "*";
const DEFAULT_SESSION_SECRET: &str = "dev-secret-key";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
}

/// Settings read once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct AppConfig {
    pub news_api_key: Option<String>,
    pub allowed_origin: String,
    pub session_secret: String,
    pub news_api_url: String,
    pub hackernews_api_url: String,
    pub port: u16,
}

// The key and secret are never printed
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("news_api_key", &self.news_api_key.as_ref().map(|_| "<redacted>"))
            .field("allowed_origin", &self.allowed_origin)
            .field("news_api_url", &self.news_api_url)
            .field("hackernews_api_url", &self.hackernews_api_url)
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(PORT) {
            Some(p) => p.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', falling back to {}", p, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            news_api_key: get(NEWS_API_KEY),
            allowed_origin: get(ALLOWED_ORIGIN).unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            session_secret: get(SESSION_SECRET)
                .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string()),
            news_api_url: get(NEWS_API_URL).unwrap_or_else(|| newsapi::DEFAULT_BASE_URL.to_string()),
            hackernews_api_url: get(HACKERNEWS_API_URL)
                .unwrap_or_else(|| hackernews::DEFAULT_BASE_URL.to_string()),
            port,
        }
    }

    pub fn resolve_api_key(&self) -> Result<&str, ConfigError> {
        self.news_api_key
            .as_deref()
            .ok_or(ConfigError::Missing(NEWS_API_KEY))
    }

    pub fn resolve_allowed_origin(&self) -> &str {
        if self.allowed_origin.is_empty() {
            DEFAULT_ORIGIN
        } else {
            &self.allowed_origin
        }
    }
}
