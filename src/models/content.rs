// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only sections: notifications, suggestions, and the workout summary.

use crate::models::{GoalBook, Workout};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Notifications shown at the top of the page.
pub fn default_notifications() -> Vec<String> {
    vec!["Reminder: Log your workout!".to_string()]
}

/// An exercise suggestion tied to a goal.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub goal: &'static str,
    pub text: &'static str,
}

pub static SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        goal: "Run 10 miles",
        text: "Start with a 2-mile jog every morning to build endurance.",
    },
    Suggestion {
        goal: "Build Upper Body Strength",
        text: "Incorporate push-ups and pull-ups into your routine 3 times a week.",
    },
    Suggestion {
        goal: "Improve Flexibility",
        text: "Try a daily 10-minute stretching session targeting hamstrings and shoulders.",
    },
];

/// Totals shown in the workout summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub workouts: u32,
    pub total_minutes: f64,
    pub total_calories: f64,
    pub goals_finished: u32,
    pub goals_total: u32,
}

impl WorkoutSummary {
    pub fn compute(workouts: &[Workout], goals: &GoalBook) -> Self {
        Self {
            workouts: workouts.len() as u32,
            total_minutes: workouts.iter().map(|w| w.duration).sum(),
            total_calories: workouts.iter().map(|w| w.calories).sum(),
            goals_finished: goals.goals().iter().filter(|g| g.is_finished()).count() as u32,
            goals_total: goals.goals().len() as u32,
        }
    }
}
