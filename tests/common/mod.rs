#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use catalog::{CatalogService, build_router};
use catalog::catalog::Catalog;
use catalog::config::IdStrategy;
use catalog::handler::AppState;
use serde_json::Value;
use tower::util::ServiceExt;

pub fn seeded_app() -> CatalogService {
    build_router(AppState::new(Catalog::new(IdStrategy::Counter, true)))
}

pub fn app_with(strategy: IdStrategy, seed: bool) -> CatalogService {
    build_router(AppState::new(Catalog::new(strategy, seed)))
}

/// Sends one request through a clone of the router so state persists across calls.
pub async fn send(app: &CatalogService, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_raw(app: &CatalogService, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &CatalogService, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}
