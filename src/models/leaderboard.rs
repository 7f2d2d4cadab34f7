// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard entries and ranking metrics.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_workouts: u32,
    pub calories_burned: f64,
}

impl LeaderboardEntry {
    pub fn new(username: &str, total_workouts: u32, calories_burned: f64) -> Self {
        Self {
            username: username.to_string(),
            total_workouts,
            calories_burned,
        }
    }
}

/// Metric the leaderboard is ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RankMetric {
    #[default]
    TotalWorkouts,
    CaloriesBurned,
}

impl RankMetric {
    /// Descending order of `a` and `b` under this metric.
    pub fn descending(self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        match self {
            RankMetric::TotalWorkouts => b.total_workouts.cmp(&a.total_workouts),
            RankMetric::CaloriesBurned => b.calories_burned.total_cmp(&a.calories_burned),
        }
    }
}

/// The fixed seed set.
pub fn seed_entries() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("User1", 20, 5000.0),
        LeaderboardEntry::new("User2", 15, 4500.0),
        LeaderboardEntry::new("User3", 18, 3000.0),
    ]
}
