// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout logging.

use crate::error::Result;
use crate::models::forms::WorkoutForm;
use crate::models::Workout;
use crate::time_utils::today_utc;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/workouts", get(list_workouts).post(log_workout))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutsResponse {
    pub workouts: Vec<Workout>,
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Json<WorkoutsResponse> {
    Json(WorkoutsResponse {
        workouts: state.session.workouts.get(),
    })
}

/// Log a workout; the chart point for today follows its duration.
async fn log_workout(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<WorkoutForm>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutsResponse>)> {
    let Json(form) = payload?;
    form.validate()?;

    let workouts = state.session.log_workout(form.into_workout(), today_utc());
    Ok((StatusCode::CREATED, Json(WorkoutsResponse { workouts })))
}
