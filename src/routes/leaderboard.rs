// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard view and metric selection.

use crate::error::Result;
use crate::models::{LeaderboardEntry, RankMetric};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/leaderboard/metric", put(select_metric))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankedEntry {
    /// 1-based position in the current order
    pub rank: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    pub metric: RankMetric,
    pub entries: Vec<RankedEntry>,
}

#[derive(Deserialize, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MetricSelection {
    pub metric: RankMetric,
}

/// Current order as last written by the ranker.
async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    let entries = state
        .session
        .leaderboard
        .get()
        .into_iter()
        .zip(1..)
        .map(|(entry, rank)| RankedEntry { rank, entry })
        .collect();

    Json(LeaderboardResponse {
        metric: state.session.metric.get(),
        entries,
    })
}

/// Switch the ranking metric. The ranker re-sorts right away.
async fn select_metric(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<MetricSelection>, JsonRejection>,
) -> Result<Json<MetricSelection>> {
    let Json(selection) = payload?;
    state.session.select_metric(selection.metric);
    Ok(Json(selection))
}
