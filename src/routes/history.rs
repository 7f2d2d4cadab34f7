// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Historical workout chart: snapshot and live update stream.

use crate::models::TimeSeriesPoint;
use crate::services::ChartEvent;
use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_util::stream::{self, Stream, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/history", get(get_history))
        .route("/api/history/stream", get(stream_history))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryResponse {
    pub points: Vec<TimeSeriesPoint>,
}

async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        points: state.session.feed.points(),
    })
}

/// Server-Sent Events for the chart: one `init`, then an `upsert` per change.
///
/// A subscriber that falls behind gets a fresh `init` instead of the
/// updates it missed.
async fn stream_history(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    // Subscribe before taking the snapshot so no upsert falls in between.
    let rx = state.chart.subscribe();
    let init = ChartEvent::Init(state.session.feed.points());
    let shutdown = state.shutdown_signal();

    let updates = stream::unfold((rx, state), |(mut rx, state)| async move {
        let event = next_chart_event(&mut rx, &state).await?;
        Some((event, (rx, state)))
    });

    let events = stream::once(async move { init })
        .chain(updates)
        .take_until(shutdown)
        .map(|event| to_sse_event(&event));

    Sse::new(events).keep_alive(KeepAlive::default())
}

async fn next_chart_event(
    rx: &mut broadcast::Receiver<ChartEvent>,
    state: &AppState,
) -> Option<ChartEvent> {
    match rx.recv().await {
        Ok(event) => Some(event),
        Err(RecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "Chart stream lagged, resending full series");
            Some(ChartEvent::Init(state.session.feed.points()))
        }
        Err(RecvError::Closed) => None,
    }
}

fn to_sse_event(event: &ChartEvent) -> Result<Event, axum::Error> {
    let sse = Event::default().event(event.name());
    match event {
        ChartEvent::Init(points) => sse.json_data(points),
        ChartEvent::Upsert(point) => sse.json_data(point),
    }
}
