// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod challenge;
pub mod content;
pub mod forms;
pub mod goal;
pub mod leaderboard;
pub mod profile;
pub mod timeseries;
pub mod workout;

pub use challenge::{Challenge, ChallengeList};
pub use content::{Suggestion, WorkoutSummary};
pub use goal::{Goal, GoalBook};
pub use leaderboard::{LeaderboardEntry, RankMetric};
pub use profile::{Profile, ProfileField, ProfileMode, ProfileState};
pub use timeseries::TimeSeriesPoint;
pub use workout::{append_workout, Workout};
