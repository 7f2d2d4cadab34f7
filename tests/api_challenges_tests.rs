// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge list, creation, and acceptance.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_create_and_accept_challenge() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/challenges",
        Some(json!({"text": "Cycle 20 km"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let challenges = body["challenges"].as_array().unwrap();
    assert_eq!(challenges.len(), 5);
    assert_eq!(challenges[4]["text"], "Cycle 20 km");
    assert_eq!(challenges[4]["accepted"], false);

    let (status, body) = common::send(&app, "POST", "/api/challenges/4/accept", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenges"][4]["accepted"], true);

    // Accepting again keeps it accepted.
    let (status, body) = common::send(&app, "POST", "/api/challenges/4/accept", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenges"][4]["accepted"], true);
}

#[tokio::test]
async fn test_blank_challenge_rejected() {
    let (app, state) = common::create_test_app();

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/challenges",
        Some(json!({"text": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.session.challenges.get().len(), 4);
}

#[tokio::test]
async fn test_accept_out_of_range_is_not_found() {
    let (app, state) = common::create_test_app();
    let before = state.session.challenges.get();

    let (status, _) = common::send(&app, "POST", "/api/challenges/9/accept", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.session.challenges.get(), before);
}

#[tokio::test]
async fn test_read_only_sections() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(&app, "GET", "/api/notifications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notifications"][0], "Reminder: Log your workout!");

    let (status, body) = common::send(&app, "GET", "/api/suggestions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    assert_eq!(body["suggestions"][0]["goal"], "Run 10 miles");

    let (status, body) = common::send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
