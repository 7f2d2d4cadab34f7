// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness challenges.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Challenge {
    pub text: String,
    /// Once true, stays true.
    pub accepted: bool,
}

/// Ordered challenge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeList(Vec<Challenge>);

impl Default for ChallengeList {
    fn default() -> Self {
        let seed = [
            ("Run 5 kilometers", false),
            ("Complete 50 push-ups", true),
            ("Drink 2 liters of water daily", false),
            ("Meditate for 10 minutes", true),
        ];
        Self(
            seed.into_iter()
                .map(|(text, accepted)| Challenge {
                    text: text.to_string(),
                    accepted,
                })
                .collect(),
        )
    }
}

impl ChallengeList {
    pub fn as_slice(&self) -> &[Challenge] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a new, unaccepted challenge. Blank text is ignored.
    pub fn create(mut self, text: &str) -> Self {
        if !text.trim().is_empty() {
            self.0.push(Challenge {
                text: text.to_string(),
                accepted: false,
            });
        }
        self
    }

    /// Mark the challenge at `index` accepted. Out-of-range is a no-op.
    pub fn accept(mut self, index: usize) -> Self {
        if let Some(challenge) = self.0.get_mut(index) {
            challenge.accepted = true;
        }
        self
    }
}
