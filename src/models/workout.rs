// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged workout model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A logged workout. Insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    /// Exercise type (e.g. "Running")
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration in minutes
    pub duration: f64,
    /// Calories burned
    pub calories: f64,
}

/// Append a workout, returning the new list.
pub fn append_workout(mut workouts: Vec<Workout>, workout: Workout) -> Vec<Workout> {
    workouts.push(workout);
    workouts
}
