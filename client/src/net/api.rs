//! HTTP helpers for the analysis backend endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and undecodable bodies are kept
//! apart in `ApiError` so callers can log precisely, even though the UI
//! collapses them into a single user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, RiskReport};
#[cfg(feature = "hydrate")]
use super::types::{ChatResponse, PrecheckReport};

pub const CHECK_AUTHENTICITY_ENDPOINT: &str = "/check-authenticity";
pub const CHAT_ENDPOINT: &str = "/chat";
pub const RISKS_ENDPOINT: &str = "/risks.json";
/// Native form action for the full analysis submission.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Failure modes of a backend round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Send the upload form to `POST /check-authenticity` as multipart.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the backend responds with a
/// non-OK status, or the body is not a precheck report.
#[cfg(feature = "hydrate")]
pub async fn check_authenticity(form: web_sys::FormData) -> Result<PrecheckReport, ApiError> {
    let resp = gloo_net::http::Request::post(CHECK_AUTHENTICITY_ENDPOINT)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    status_result(resp.ok(), resp.status())?;
    resp.json::<PrecheckReport>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Post the chat transcript to `POST /chat` and return the model reply.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the backend responds with a
/// non-OK status, or the body has no `response` string.
pub async fn send_chat(request: &ChatRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result(resp.ok(), resp.status())?;
        let body: ChatResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the analyzed document's risk report from `GET /risks.json`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the backend responds with a
/// non-OK status, or the body is not a risk report.
pub async fn fetch_risk_report() -> Result<RiskReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(RISKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result(resp.ok(), resp.status())?;
        resp.json::<RiskReport>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
