//! Helpers for driving the router in handler tests

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::domain::{RegionService, WalkDifficultyService, WalkService};
use crate::storage::test_utils::CountingRegionStorage;
use crate::storage::{DbConnection, RegionStorage, WalkDifficultyRepository, WalkRepository};
use crate::AppState;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// App state over fresh in-memory databases, with a given region storage
pub async fn test_state_with_regions(regions: Arc<dyn RegionStorage>) -> AppState {
    let db = DbConnection::init_test().await.expect("Failed to create test database");
    AppState::new(
        RegionService::new(regions),
        WalkService::new(Arc::new(WalkRepository::new(db.clone()))),
        WalkDifficultyService::new(Arc::new(WalkDifficultyRepository::new(db))),
    )
}

/// A full router plus the counting region storage behind it
pub async fn test_app() -> (Router, CountingRegionStorage) {
    let regions = CountingRegionStorage::new().await;
    let state = test_state_with_regions(Arc::new(regions.clone())).await;
    (super::router().with_state(state), regions)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Router failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse { status, headers, body }
}
