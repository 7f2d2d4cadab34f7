// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly goals with clamped progress.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A weekly goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Goal {
    pub id: u32,
    pub name: String,
    /// Positive target value
    pub target: f64,
    /// Progress so far, advanced one step at a time
    pub progress: f64,
}

impl Goal {
    /// Progress actions are disabled once the target is reached.
    pub fn is_finished(&self) -> bool {
        self.progress >= self.target
    }
}

/// The goal collection plus its id counter.
///
/// Stored as a plain `Goal[]`. Ids come from a counter that only grows,
/// so an id is never handed out twice within a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Goal>", into = "Vec<Goal>")]
pub struct GoalBook {
    goals: Vec<Goal>,
    next_id: u32,
}

impl Default for GoalBook {
    fn default() -> Self {
        Self::from(vec![Goal {
            id: 1,
            name: "Run 10 miles".to_string(),
            target: 10.0,
            progress: 0.0,
        }])
    }
}

impl From<Vec<Goal>> for GoalBook {
    fn from(goals: Vec<Goal>) -> Self {
        let max_id = goals.iter().map(|g| g.id).max().unwrap_or(0);
        let next_id = max_id.max(goals.len() as u32).saturating_add(1);
        Self { goals, next_id }
    }
}

impl From<GoalBook> for Vec<Goal> {
    fn from(book: GoalBook) -> Self {
        book.goals
    }
}

impl GoalBook {
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: u32) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Id the next added goal will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Append a new goal with zero progress.
    pub fn add(mut self, name: String, target: f64) -> Self {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.goals.push(Goal {
            id,
            name,
            target,
            progress: 0.0,
        });
        self
    }

    /// Advance one goal by one step, clamped to its target.
    ///
    /// Unknown ids and finished goals pass through unchanged.
    pub fn increment(self, id: u32) -> Self {
        let goals = self
            .goals
            .into_iter()
            .map(|goal| {
                if goal.id == id && !goal.is_finished() {
                    Goal {
                        progress: (goal.progress + 1.0).min(goal.target),
                        ..goal
                    }
                } else {
                    goal
                }
            })
            .collect();
        Self { goals, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_book() {
        let book = GoalBook::default();
        assert_eq!(book.goals().len(), 1);
        assert_eq!(book.goals()[0].name, "Run 10 miles");
        assert_eq!(book.next_id(), 2);
    }

    #[test]
    fn test_add_goal_appends_with_zero_progress() {
        let book = GoalBook::default().add("Run 5k".to_string(), 5.0);

        let last = book.goals().last().unwrap();
        assert_eq!(last.name, "Run 5k");
        assert_eq!(last.target, 5.0);
        assert_eq!(last.progress, 0.0);
        assert_eq!(last.id, 2);
        assert_eq!(book.goals().len(), 2);
    }

    #[test]
    fn test_increment_is_clamped_at_target() {
        let mut book = GoalBook::default().add("Stretch".to_string(), 3.0);
        for _ in 0..10 {
            book = book.increment(2);
            let goal = book.get(2).unwrap();
            assert!(goal.progress <= goal.target);
        }
        assert_eq!(book.get(2).unwrap().progress, 3.0);
        assert!(book.get(2).unwrap().is_finished());
        assert_eq!(book.get(1).unwrap().progress, 0.0);
    }

    #[test]
    fn test_fractional_target_never_exceeded() {
        let mut book = GoalBook::from(vec![]).add("Swim".to_string(), 2.5);
        for _ in 0..5 {
            book = book.increment(1);
        }
        let goal = book.get(1).unwrap();
        assert_eq!(goal.progress, 2.5);
        assert!(goal.is_finished());
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        let book = GoalBook::default().add("Run 5k".to_string(), 5.0);
        let after = book.clone().increment(99);
        assert_eq!(after, book);
    }

    #[test]
    fn test_ids_stay_unique_after_load_with_gaps() {
        let stored = vec![
            Goal {
                id: 1,
                name: "a".to_string(),
                target: 1.0,
                progress: 0.0,
            },
            Goal {
                id: 5,
                name: "b".to_string(),
                target: 1.0,
                progress: 0.0,
            },
        ];
        let book = GoalBook::from(stored).add("c".to_string(), 2.0);
        assert_eq!(book.goals().last().unwrap().id, 6);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_value(GoalBook::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 1, "name": "Run 10 miles", "target": 10.0, "progress": 0.0}])
        );
    }
}
