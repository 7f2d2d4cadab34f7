// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fitness_tracker::config::Config;
use fitness_tracker::routes::create_router;
use fitness_tracker::services::BroadcastChart;
use fitness_tracker::state::Session;
use fitness_tracker::store::{KeyValueStore, MemoryStore};
use fitness_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the given store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<dyn KeyValueStore>) -> (Router, Arc<AppState>) {
    let config = Config::test_default();
    let chart = Arc::new(BroadcastChart::new());
    let session = Session::open(store, chart.clone());

    let state = Arc::new(AppState::new(config, session, chart));
    (create_router(state.clone()), state)
}

/// Create a test app with a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Send a request with an optional JSON body; return status and parsed body.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
