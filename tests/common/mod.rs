// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fotografiarte::config::Config;
use fotografiarte::db::{KeyValueStore, MemoryStore};
use fotografiarte::routes::create_router;
use fotografiarte::services::FixedFeedbackScorer;
use fotografiarte::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A tiny valid PNG header as a data URL.
#[allow(dead_code)]
pub const TEST_IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Create a test app with the given stored `(key, json)` entries.
#[allow(dead_code)]
pub fn create_test_app_with_entries(entries: &[(&str, &str)]) -> (Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::with_entries(
        entries.iter().copied(),
    )))
}

#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<dyn KeyValueStore>) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::default(),
        store,
        Arc::new(FixedFeedbackScorer),
    ));
    (create_router(state.clone()), state)
}

/// Send a GET and return status and parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

/// Send a POST with an optional JSON body and return status and parsed JSON body.
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method("POST").uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

#[allow(dead_code)]
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
