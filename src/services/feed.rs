// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-duration time series and the chart it drives.
//!
//! The chart widget is an external collaborator: it gets the whole series
//! once (`init`) and then one `upsert` per change. Points are never deleted.
//! Chart calls happen under the series write lock, so the chart sees
//! changes in the same order as the stored series.

use crate::models::timeseries::{seed_points, upsert_point};
use crate::models::{TimeSeriesPoint, Workout};
use crate::state::Container;
use crate::time_utils::format_date_key;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Chart widget contract.
pub trait ChartSink: Send + Sync {
    /// Replace the whole series.
    fn init(&self, points: &[TimeSeriesPoint]);

    /// Insert or replace a single point.
    fn upsert(&self, point: &TimeSeriesPoint);
}

/// Chart that ignores all updates.
pub struct NullChart;

impl ChartSink for NullChart {
    fn init(&self, _points: &[TimeSeriesPoint]) {}
    fn upsert(&self, _point: &TimeSeriesPoint) {}
}

/// Chart update as sent to the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Init(Vec<TimeSeriesPoint>),
    Upsert(TimeSeriesPoint),
}

impl ChartEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChartEvent::Init(_) => "init",
            ChartEvent::Upsert(_) => "upsert",
        }
    }
}

const CHART_CHANNEL_CAPACITY: usize = 64;

/// Chart sink fanning updates out to any number of live subscribers.
pub struct BroadcastChart {
    tx: broadcast::Sender<ChartEvent>,
}

impl Default for BroadcastChart {
    fn default() -> Self {
        let (tx, _rx) = broadcast::channel(CHART_CHANNEL_CAPACITY);
        Self { tx }
    }
}

impl BroadcastChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChartEvent> {
        self.tx.subscribe()
    }

    // No subscribers is normal (no chart open), so send errors are dropped.
    fn publish(&self, event: ChartEvent) {
        let _ = self.tx.send(event);
    }
}

impl ChartSink for BroadcastChart {
    fn init(&self, points: &[TimeSeriesPoint]) {
        self.publish(ChartEvent::Init(points.to_vec()));
    }

    fn upsert(&self, point: &TimeSeriesPoint) {
        self.publish(ChartEvent::Upsert(*point));
    }
}

/// Date-ordered series of workout durations, mirrored to a chart.
pub struct TimeSeriesFeed {
    points: Container<Vec<TimeSeriesPoint>>,
    chart: Arc<dyn ChartSink>,
}

impl TimeSeriesFeed {
    /// Feed starting from the sample history.
    pub fn seeded(chart: Arc<dyn ChartSink>) -> Self {
        let feed = Self {
            points: Container::new(Vec::new()),
            chart,
        };
        feed.load(seed_points());
        feed
    }

    pub fn points(&self) -> Vec<TimeSeriesPoint> {
        self.points.get()
    }

    pub fn len(&self) -> usize {
        self.points.read(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bulk load: replace the entire series.
    ///
    /// Input is put in date order; for duplicate dates the later entry wins.
    pub fn load(&self, points: Vec<TimeSeriesPoint>) {
        self.points.modify(|current| {
            *current = points.into_iter().fold(Vec::new(), |mut acc, point| {
                upsert_point(&mut acc, point);
                acc
            });
            self.chart.init(current);
        });
    }

    /// Insert or replace the point for `point.date`.
    ///
    /// Returns `true` when an existing point was replaced.
    pub fn upsert(&self, point: TimeSeriesPoint) -> bool {
        let mut replaced = false;
        self.points.modify(|points| {
            replaced = upsert_point(points, point);
            self.chart.upsert(&point);
        });
        tracing::debug!(
            date = %format_date_key(point.date),
            value = point.value,
            replaced,
            "Chart point upserted"
        );
        replaced
    }

    /// One point per day: the latest workout's duration on `today`.
    pub fn record_workout(&self, workout: &Workout, today: NaiveDate) -> bool {
        self.upsert(TimeSeriesPoint {
            date: today,
            value: workout.duration,
        })
    }
}
