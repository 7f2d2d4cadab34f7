// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly goal tracking.

use crate::error::{AppError, Result};
use crate::models::forms::GoalForm;
use crate::models::{Goal, GoalBook};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/goals", get(list_goals).post(add_goal))
        .route("/api/goals/{id}/progress", post(add_progress))
}

/// A goal plus whether its progress button is disabled.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub finished: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalsResponse {
    pub goals: Vec<GoalView>,
}

impl From<GoalBook> for GoalsResponse {
    fn from(book: GoalBook) -> Self {
        let goals = Vec::<Goal>::from(book)
            .into_iter()
            .map(|goal| GoalView {
                finished: goal.is_finished(),
                goal,
            })
            .collect();
        Self { goals }
    }
}

async fn list_goals(State(state): State<Arc<AppState>>) -> Json<GoalsResponse> {
    Json(state.session.goals.get().into())
}

async fn add_goal(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GoalForm>, JsonRejection>,
) -> Result<(StatusCode, Json<GoalsResponse>)> {
    let Json(form) = payload?;
    form.validate()?;

    let book = state.session.add_goal(form.name, form.target);
    tracing::info!(goals = book.goals().len(), "Goal added");
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// "+1 Progress". Finished goals are left as they are.
async fn add_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<GoalsResponse>> {
    if !state.session.goals.read(|book| book.contains(id)) {
        return Err(AppError::NotFound(format!("Goal {} not found", id)));
    }

    let book = state.session.increment_goal(id);
    Ok(Json(book.into()))
}
