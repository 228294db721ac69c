use anyhow::Context;
use news_proxy::app;
use news_proxy::config::AppConfig;
use news_proxy::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();
    tracing::info!("Loaded configuration: {:?}", config);
    if config.news_api_key.is_none() {
        tracing::warn!("NEWS_API_KEY is not set. News routes will return a configuration error.");
    }

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("NewsProxy/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState::new(config, http_client);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("News proxy listening on {}", addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
