// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error responses and security headers.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use fitness_tracker::error::AppError;
use tower::ServiceExt;

mod common;

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_response() {
    let (status, body) = body_json(AppError::NotFound("Goal 7".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_bad_request_carries_details() {
    let (status, body) = body_json(AppError::BadRequest("name must not be blank".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["details"], "name must not be blank");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/goals")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": \"Run 5k\","))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "bad_request");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/challenges")
                .body(Body::from(r#"{"text": "Plank 2 minutes"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _state) = common::create_test_app();
    let (status, _) = common::send(&app, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
