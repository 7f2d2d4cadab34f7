// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness challenges.

use crate::error::{AppError, Result};
use crate::models::forms::ChallengeForm;
use crate::models::{Challenge, ChallengeList};
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
        .route("/api/challenges", get(list_challenges).post(create_challenge))
        .route("/api/challenges/{index}/accept", post(accept_challenge))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengesResponse {
    pub challenges: Vec<Challenge>,
}

impl From<ChallengeList> for ChallengesResponse {
    fn from(list: ChallengeList) -> Self {
        Self {
            challenges: list.as_slice().to_vec(),
        }
    }
}

async fn list_challenges(State(state): State<Arc<AppState>>) -> Json<ChallengesResponse> {
    Json(state.session.challenges.get().into())
}

async fn create_challenge(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ChallengeForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ChallengesResponse>)> {
    let Json(form) = payload?;
    form.validate()?;

    let list = state.session.create_challenge(&form.text);
    Ok((StatusCode::CREATED, Json(list.into())))
}

/// Accept a challenge by list position. Accepting twice is harmless.
async fn accept_challenge(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<ChallengesResponse>> {
    if index >= state.session.challenges.read(ChallengeList::len) {
        return Err(AppError::NotFound(format!("Challenge {} not found", index)));
    }

    let list = state.session.accept_challenge(index);
    Ok(Json(list.into()))
}
