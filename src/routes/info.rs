// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only sections: notifications, suggestions, workout summary.

use crate::models::content::SUGGESTIONS;
use crate::models::{Suggestion, WorkoutSummary};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications", get(get_notifications))
        .route("/api/suggestions", get(get_suggestions))
        .route("/api/summary", get(get_summary))
}

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<String>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: &'static [Suggestion],
}

async fn get_notifications(State(state): State<Arc<AppState>>) -> Json<NotificationsResponse> {
    Json(NotificationsResponse {
        notifications: state.session.notifications.clone(),
    })
}

async fn get_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: &SUGGESTIONS,
    })
}

async fn get_summary(State(state): State<Arc<AppState>>) -> Json<WorkoutSummary> {
    Json(state.session.summary())
}
