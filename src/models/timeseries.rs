// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart points keyed by calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One point of the workout-duration chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TimeSeriesPoint {
    /// Unique key, "YYYY-MM-DD" on the wire
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub value: f64,
}

/// Sample history the chart starts with.
pub fn seed_points() -> Vec<TimeSeriesPoint> {
    const VALUES: [f64; 15] = [
        6.0, 8.0, 5.0, 7.0, 6.0, 9.0, 4.0, 7.0, 6.0, 8.0, 5.0, 9.0, 7.0, 6.0, 8.0,
    ];
    NaiveDate::from_ymd_opt(2023, 1, 3)
        .into_iter()
        .flat_map(|start| start.iter_days().zip(VALUES))
        .map(|(date, value)| TimeSeriesPoint { date, value })
        .collect()
}

/// Insert `point`, or replace the value of the point with the same date.
///
/// Points stay ordered by date. Returns `true` if an existing point was replaced.
pub fn upsert_point(points: &mut Vec<TimeSeriesPoint>, point: TimeSeriesPoint) -> bool {
    // Fast path: the common case is today's point, at or after the end.
    match points.last().map(|p| p.date) {
        Some(last) if last == point.date => {
            if let Some(p) = points.last_mut() {
                p.value = point.value;
            }
            return true;
        }
        Some(last) if last > point.date => {}
        _ => {
            points.push(point);
            return false;
        }
    }

    match points.binary_search_by(|p| p.date.cmp(&point.date)) {
        Ok(i) => {
            points[i].value = point.value;
            true
        }
        Err(i) => {
            points.insert(i, point);
            false
        }
    }
}
