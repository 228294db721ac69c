pub mod config;
pub mod cors;
pub mod error;
pub mod functions;
pub mod handlers;
pub mod pages;
pub mod state;

use axum::{middleware, routing::get, Router};
use handlers::{common, hackernews, health, news, users};
use state::SharedState;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(health::documentation).fallback(common::method_not_allowed))
        .route(
            "/api/health",
            get(health::health).fallback(common::method_not_allowed),
        )
        .route("/api/info", get(health::info).fallback(common::method_not_allowed))
        .route(
            "/api/gaming-news",
            get(news::gaming_news_api).fallback(common::method_not_allowed),
        )
        .route(
            "/gaming-news",
            get(news::gaming_news_page).fallback(common::method_not_allowed),
        )
        .route(
            "/api/hacker-news",
            get(hackernews::hacker_news_api).fallback(common::method_not_allowed),
        )
        .route(
            "/hacker-news",
            get(hackernews::hacker_news_page).fallback(common::method_not_allowed),
        )
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/api/news",
            get(functions::news_handler).fallback(common::method_not_allowed),
        )
        .route(
            "/api/debug-env",
            get(functions::debug_env_handler).fallback(common::method_not_allowed),
        )
        .fallback(common::not_found)
        // Also wraps the fallbacks, so preflights to any path get 204
        .layer(middleware::from_fn_with_state(state.clone(), cors::middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
