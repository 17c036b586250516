//! Relay handlers for the analysis backend.
//!
//! DESIGN
//! ======
//! Each handler forwards the request body and content type upstream and
//! relays status, content type, `Location`, cookies, and body back
//! verbatim. The host never interprets analysis payloads, so a new backend
//! field reaches the client without a host change. Only upstream failures
//! are translated, into `502 Bad Gateway`.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use client::net::api::{ANALYZE_ENDPOINT, CHAT_ENDPOINT, CHECK_AUTHENTICITY_ENDPOINT, RISKS_ENDPOINT};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("analysis backend unreachable: {0}")]
    Unreachable(reqwest::Error),

    #[error("analysis backend timed out")]
    Timeout,

    #[error("reading analysis backend response failed: {0}")]
    Body(reqwest::Error),

    #[error("building relay response failed: {0}")]
    Relay(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unreachable(_) | Self::Timeout | Self::Body(_) => StatusCode::BAD_GATEWAY,
            Self::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, "analysis backend unavailable").into_response()
    }
}

pub async fn check_authenticity(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, CHECK_AUTHENTICITY_ENDPOINT, &headers, body).await
}

pub async fn analyze(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, ANALYZE_ENDPOINT, &headers, body).await
}

pub async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, CHAT_ENDPOINT, &headers, body).await
}

pub async fn risks(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ProxyError> {
    forward(&state, Method::GET, RISKS_ENDPOINT, &headers, Bytes::new()).await
}

async fn forward(
    state: &AppState,
    method: Method,
    endpoint: &'static str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = format!("{}{endpoint}", state.config.backend_url);
    let mut request = state.http.request(method, &url);
    for name in [CONTENT_TYPE, COOKIE] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(endpoint, error = %e, "analysis backend request failed");
        if e.is_timeout() { ProxyError::Timeout } else { ProxyError::Unreachable(e) }
    })?;

    let status = upstream.status();
    let mut builder = Response::builder().status(status);
    if let Some(value) = upstream.headers().get(CONTENT_TYPE) {
        builder = builder.header(CONTENT_TYPE, value.clone());
    }
    if let Some(location) = upstream.headers().get(LOCATION).and_then(|v| v.to_str().ok()) {
        builder = builder.header(LOCATION, relay_location(location, &state.config.backend_url));
    }
    for cookie in upstream.headers().get_all(SET_COOKIE) {
        builder = builder.header(SET_COOKIE, cookie.clone());
    }

    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(endpoint, error = %e, "analysis backend body read failed");
        ProxyError::Body(e)
    })?;
    if !status.is_success() && !status.is_redirection() {
        tracing::info!(endpoint, status = status.as_u16(), "analysis backend returned non-success status");
    }

    builder.body(Body::from(bytes)).map_err(|e| ProxyError::Relay(e.to_string()))
}

/// Rewrite an absolute redirect into the backend as a path on this host.
fn relay_location(location: &str, backend_url: &str) -> String {
    match location.strip_prefix(backend_url) {
        Some("") => "/".to_owned(),
        Some(path) if path.starts_with('/') => path.to_owned(),
        _ => location.to_owned(),
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
