//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use prereview_core::repository::EventRepository;
use prereview_event_store::memory_event_repository::InMemoryEventRepository;
use prereview_test_support::FixedClock;
use tower::ServiceExt;

use prereview_api::state::AppState;

/// Build the full app router over a fresh in-memory event store and a fixed
/// clock. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryEventRepository::new()))
}

/// Build the full app router over the given repository, so tests can share
/// one store across requests or inject failures.
pub fn build_test_app_with(event_repository: Arc<dyn EventRepository>) -> Router {
    let app_state = AppState::new(Arc::new(FixedClock::default()), event_repository, 16);
    prereview_api::app(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
