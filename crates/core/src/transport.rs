use crate::UpstreamError;
use reqwest::RequestBuilder;
use serde_json::Value;

const MAX_ERROR_BODY: usize = 200;

/// Send one request and parse the body as JSON.
///
/// Non-2xx statuses and transport failures become `UpstreamError`; there is
/// no retry.
pub async fn send_json(request: RequestBuilder) -> Result<Value, UpstreamError> {
    let res = request
        .send()
        .await
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body: truncate(&text),
        });
    }

    let bytes = res
        .bytes()
        .await
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("Upstream body is not JSON: {}", e);
        UpstreamError::InvalidResponse
    })
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut out: String = text.chars().take(MAX_ERROR_BODY).collect();
    out.push('…');
    out
}
