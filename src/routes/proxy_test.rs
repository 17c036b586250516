use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;
use axum::Router;
use axum::http::Request;
use axum::response::Redirect;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Serve a stand-in analysis backend on an ephemeral port.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/check-authenticity",
            post(|headers: HeaderMap, body: Bytes| async move {
                let content_type = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                axum::Json(json!({
                    "verdict": "REAL",
                    "summary": "Looks fine.",
                    "echo_content_type": content_type,
                    "echo_len": body.len(),
                }))
            }),
        )
        .route("/analyze", post(|| async { Redirect::to("/results") }))
        .route("/chat", post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model overloaded") }))
        .route(
            "/risks.json",
            get(|headers: HeaderMap| async move {
                let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
                axum::Json(json!({
                    "stats": { "severity": { "high": 1, "medium": 0, "low": 2 }, "type": { "Payment": 3 } },
                    "cookie": cookie,
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn host(backend_url: String) -> Router {
    let config = HostConfig { backend_url, ..HostConfig::default() };
    api_routes(AppState::new(config).unwrap())
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn precheck_forwards_body_and_content_type() {
    let app = host(spawn_backend().await);
    let req = Request::builder()
        .method("POST")
        .uri("/check-authenticity")
        .header(CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
        .body(Body::from("--XYZ--\r\n"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"))
    );
    let body = body_json(resp).await;
    assert_eq!(body["verdict"], "REAL");
    assert_eq!(body["echo_content_type"], "multipart/form-data; boundary=XYZ");
    assert_eq!(body["echo_len"], 9);
}

#[tokio::test]
async fn analyze_relays_redirect_without_following_it() {
    let app = host(spawn_backend().await);
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("legal_text=hello"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/results");
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let app = host(spawn_backend().await);
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"history":[],"document_text":""}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"model overloaded");
}

#[tokio::test]
async fn risks_forwards_cookie() {
    let app = host(spawn_backend().await);
    let req = Request::builder()
        .uri("/risks.json")
        .header(COOKIE, "session=abc")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["stats"]["severity"]["low"], 2);
    assert_eq!(body["cookie"], "session=abc");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = host(format!("http://{addr}"));
    let req = Request::builder().uri("/risks.json").body(Body::empty()).unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = host("http://127.0.0.1:9".to_owned());
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[test]
fn relay_location_strips_backend_origin() {
    assert_eq!(relay_location("http://127.0.0.1:5000/results", "http://127.0.0.1:5000"), "/results");
    assert_eq!(relay_location("http://127.0.0.1:5000", "http://127.0.0.1:5000"), "/");
    assert_eq!(relay_location("/results", "http://127.0.0.1:5000"), "/results");
    assert_eq!(relay_location("https://elsewhere.test/x", "http://127.0.0.1:5000"), "https://elsewhere.test/x");
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.into_response().status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Relay("bad header".to_owned()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}
