// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state containers.
//!
//! Every container holds one value and changes it only through a pure
//! `T -> T` function. Subscribers are notified after each change.
//! Persisted containers write a full snapshot while still holding the
//! write lock, so the store sees updates in the same order as memory.

use crate::models::{
    append_workout, content, leaderboard, ChallengeList, GoalBook, LeaderboardEntry,
    ProfileField, ProfileState, RankMetric, Workout, WorkoutSummary,
};
use crate::services::feed::{ChartSink, TimeSeriesFeed};
use crate::services::ranker::{Ranker, RankerHandle};
use crate::store::{keys, load_snapshot, save_snapshot, KeyValueStore};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// In-memory value with change notification.
pub struct Container<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone + Default> Container<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Borrow the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutate in place under the write lock and notify subscribers.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Replace the value with `f(current)` and return the new value.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let mut next = T::default();
        self.modify(|value| {
            *value = f(std::mem::take(value));
            next = value.clone();
        });
        next
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Change notifications for dependents (re-render, ranking, ...).
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

/// Container whose every update is written back to a store key.
pub struct Persisted<T> {
    inner: Container<T>,
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl<T> Persisted<T>
where
    T: Clone + Default + Serialize + DeserializeOwned,
{
    /// Read `key` from the store, or start from `default`.
    pub fn open(store: Arc<dyn KeyValueStore>, key: &'static str, default: T) -> Self {
        let initial = load_snapshot(store.as_ref(), key, default);
        Self {
            inner: Container::new(initial),
            store,
            key,
        }
    }

    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.read(f)
    }

    /// Apply `f`, then overwrite the stored snapshot with the result.
    ///
    /// The snapshot is written synchronously under the write lock. This
    /// keeps the store in update order, and it blocks the calling worker
    /// thread for the duration of the (small) write.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let mut next = T::default();
        self.inner.modify(|value| {
            *value = f(std::mem::take(value));
            save_snapshot(self.store.as_ref(), self.key, value);
            next = value.clone();
        });
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.subscribe()
    }
}

/// The single application context for one user session.
pub struct Session {
    pub profile: Persisted<ProfileState>,
    pub workouts: Persisted<Vec<Workout>>,
    pub goals: Persisted<GoalBook>,
    pub challenges: Container<ChallengeList>,
    pub leaderboard: Container<Vec<LeaderboardEntry>>,
    pub metric: Container<RankMetric>,
    pub feed: TimeSeriesFeed,
    pub notifications: Vec<String>,
}

impl Session {
    /// Restore persisted sections from `store` and seed the rest.
    pub fn open(store: Arc<dyn KeyValueStore>, chart: Arc<dyn ChartSink>) -> Self {
        let session = Self {
            profile: Persisted::open(store.clone(), keys::PROFILE, ProfileState::default()),
            workouts: Persisted::open(store.clone(), keys::WORKOUTS, Vec::new()),
            goals: Persisted::open(store, keys::GOALS, GoalBook::default()),
            challenges: Container::new(ChallengeList::default()),
            leaderboard: Container::new(leaderboard::seed_entries()),
            metric: Container::new(RankMetric::default()),
            feed: TimeSeriesFeed::seeded(chart),
            notifications: content::default_notifications(),
        };

        tracing::info!(
            has_profile = session.profile.read(|p| p.profile.is_some()),
            workouts = session.workouts.read(Vec::len),
            goals = session.goals.read(|g| g.goals().len()),
            "Session opened"
        );
        session
    }

    // ─── Profile ─────────────────────────────────────────────────

    pub fn edit_profile(&self, field: ProfileField, raw: &str) -> ProfileState {
        self.profile.update(|state| state.edit(field, raw))
    }

    /// Save/Update. Returns whether a profile existed to save.
    pub fn save_profile(&self) -> (ProfileState, bool) {
        let state = self.profile.update(ProfileState::save);
        let saved = state.profile.is_some();
        if saved {
            tracing::info!("Profile saved");
        }
        (state, saved)
    }

    pub fn start_profile_edit(&self) -> ProfileState {
        self.profile.update(ProfileState::start_editing)
    }

    // ─── Workouts ────────────────────────────────────────────────

    /// Append a workout and move today's chart point to its duration.
    pub fn log_workout(&self, workout: Workout, today: NaiveDate) -> Vec<Workout> {
        tracing::info!(
            kind = %workout.kind,
            duration = workout.duration,
            calories = workout.calories,
            "Workout logged"
        );
        let list = self.workouts.update(|list| append_workout(list, workout.clone()));
        self.feed.record_workout(&workout, today);
        list
    }

    // ─── Goals ───────────────────────────────────────────────────

    pub fn add_goal(&self, name: String, target: f64) -> GoalBook {
        self.goals.update(|book| book.add(name, target))
    }

    /// Advance a goal by one step. Unknown ids leave the book untouched.
    pub fn increment_goal(&self, id: u32) -> GoalBook {
        self.goals.update(|book| book.increment(id))
    }

    // ─── Challenges ──────────────────────────────────────────────

    pub fn create_challenge(&self, text: &str) -> ChallengeList {
        self.challenges.update(|list| list.create(text))
    }

    pub fn accept_challenge(&self, index: usize) -> ChallengeList {
        self.challenges.update(|list| list.accept(index))
    }

    // ─── Leaderboard ─────────────────────────────────────────────

    /// Select the ranking metric. The running ranker re-sorts on change.
    pub fn select_metric(&self, metric: RankMetric) {
        tracing::debug!(?metric, "Leaderboard metric selected");
        self.metric.set(metric);
    }

    /// Start the periodic re-ranking task for the leaderboard view.
    pub fn spawn_ranker(&self, period: Duration) -> RankerHandle {
        Ranker::new(self.leaderboard.clone(), self.metric.subscribe(), period).spawn()
    }

    // ─── Summary ─────────────────────────────────────────────────

    pub fn summary(&self) -> WorkoutSummary {
        self.workouts
            .read(|workouts| self.goals.read(|goals| WorkoutSummary::compute(workouts, goals)))
    }
}
