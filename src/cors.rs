use crate::functions;
use crate::state::SharedState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Headers attached to every response, including errors and preflights.
pub fn headers(origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let origin = HeaderValue::from_str(origin).unwrap_or_else(|_| {
        tracing::warn!("ALLOWED_ORIGIN is not a valid header value, using '*'");
        HeaderValue::from_static("*")
    });
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers
}

/// Answers `OPTIONS` with 204 before routing; decorates everything else.
pub async fn middleware(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return functions::preflight(&state.config).into_response();
    }

    let cors = headers(state.config.resolve_allowed_origin());
    let mut response = next.run(req).await;
    response.headers_mut().extend(cors);
    response
}
