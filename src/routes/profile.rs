// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile section: field edits and the Created/Editing view state.

use crate::error::Result;
use crate::models::forms::ProfileFieldEdit;
use crate::models::{Profile, ProfileMode, ProfileState};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).patch(edit_field))
        .route("/api/profile/save", post(save_profile))
        .route("/api/profile/edit", post(start_editing))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
    pub mode: ProfileMode,
}

impl From<ProfileState> for ProfileResponse {
    fn from(state: ProfileState) -> Self {
        Self {
            profile: state.profile,
            mode: state.mode,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SaveProfileResponse {
    /// False when there was no profile to save yet
    pub saved: bool,
    #[serde(flatten)]
    pub state: ProfileResponse,
}

async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    Json(state.session.profile.get().into())
}

/// Merge one form input into the profile.
async fn edit_field(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ProfileFieldEdit>, JsonRejection>,
) -> Result<Json<ProfileResponse>> {
    let Json(edit) = payload?;
    tracing::debug!(field = ?edit.field, "Profile field edited");
    let updated = state.session.edit_profile(edit.field, &edit.value);
    Ok(Json(updated.into()))
}

/// Save / Update Profile.
async fn save_profile(State(state): State<Arc<AppState>>) -> Json<SaveProfileResponse> {
    let (updated, saved) = state.session.save_profile();
    Json(SaveProfileResponse {
        saved,
        state: updated.into(),
    })
}

/// Edit Profile.
async fn start_editing(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    Json(state.session.start_profile_edit().into())
}
