// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Periodic leaderboard re-ranking.
//!
//! A background task re-sorts the leaderboard on a fixed period and
//! whenever the selected metric changes. It reads the board container at
//! fire time. The task lives as long as its [`RankerHandle`].

use crate::models::{LeaderboardEntry, RankMetric};
use crate::state::Container;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Stable sort, strictly descending by `metric`. Ties keep their prior order.
pub fn rank(mut entries: Vec<LeaderboardEntry>, metric: RankMetric) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| metric.descending(a, b));
    entries
}

/// Re-ranking task configuration.
pub struct Ranker {
    board: Container<Vec<LeaderboardEntry>>,
    metric: watch::Receiver<RankMetric>,
    period: Duration,
}

impl Ranker {
    pub fn new(
        board: Container<Vec<LeaderboardEntry>>,
        metric: watch::Receiver<RankMetric>,
        period: Duration,
    ) -> Self {
        Self {
            board,
            metric,
            period,
        }
    }

    /// Start the task on the current tokio runtime.
    pub fn spawn(self) -> RankerHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(stop_rx));
        RankerHandle {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    async fn run(mut self, mut stop: oneshot::Receiver<()>) {
        tracing::info!(period_ms = self.period.as_millis() as u64, "Leaderboard ranker started");

        // First tick one full period from now, then every period.
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {}
                changed = self.metric.changed() => {
                    // Sender gone: the session was torn down.
                    if changed.is_err() {
                        break;
                    }
                }
            }
            self.rank_now();
        }

        tracing::info!("Leaderboard ranker stopped");
    }

    fn rank_now(&mut self) {
        let metric = *self.metric.borrow_and_update();
        self.board.update(|entries| rank(entries, metric));
        tracing::debug!(?metric, "Leaderboard re-ranked");
    }
}

/// Owner of a running ranker. Dropping it aborts the task.
pub struct RankerHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl RankerHandle {
    /// Stop the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Leaderboard ranker ended abnormally");
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for RankerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leaderboard::seed_entries;

    fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.username.as_str()).collect()
    }

    fn perturbed() -> Vec<LeaderboardEntry> {
        vec![
            LeaderboardEntry::new("A", 10, 5000.0),
            LeaderboardEntry::new("B", 30, 1000.0),
            LeaderboardEntry::new("C", 20, 3000.0),
        ]
    }

    #[test]
    fn test_rank_seed_by_calories() {
        let ranked = rank(seed_entries(), RankMetric::CaloriesBurned);
        assert_eq!(names(&ranked), ["User1", "User2", "User3"]);
    }

    #[test]
    fn test_rank_seed_by_workouts() {
        let ranked = rank(seed_entries(), RankMetric::TotalWorkouts);
        assert_eq!(names(&ranked), ["User1", "User3", "User2"]);
    }

    #[test]
    fn test_rank_spec_triples_same_order_both_metrics() {
        let entries = vec![
            LeaderboardEntry::new("A", 20, 5000.0),
            LeaderboardEntry::new("B", 15, 4500.0),
            LeaderboardEntry::new("C", 18, 3000.0),
        ];
        let by_calories = rank(entries, RankMetric::CaloriesBurned);
        assert_eq!(names(&by_calories), ["A", "B", "C"]);
    }

    #[test]
    fn test_rank_perturbed_orders_differ() {
        let by_calories = rank(perturbed(), RankMetric::CaloriesBurned);
        assert_eq!(names(&by_calories), ["A", "C", "B"]);

        let by_workouts = rank(by_calories, RankMetric::TotalWorkouts);
        assert_eq!(names(&by_workouts), ["B", "C", "A"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let entries = vec![
            LeaderboardEntry::new("first", 5, 100.0),
            LeaderboardEntry::new("top", 9, 100.0),
            LeaderboardEntry::new("second", 5, 100.0),
            LeaderboardEntry::new("third", 5, 100.0),
        ];
        let ranked = rank(entries, RankMetric::TotalWorkouts);
        assert_eq!(names(&ranked), ["top", "first", "second", "third"]);

        let ranked = rank(ranked, RankMetric::CaloriesBurned);
        assert_eq!(names(&ranked), ["top", "first", "second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ranks_on_period_not_before() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::CaloriesBurned);
        let handle = Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn();

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(names(&board.get()), ["A", "B", "C"]);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(names(&board.get()), ["A", "C", "B"]);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_metric_change_ranks_immediately() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::CaloriesBurned);
        let handle = Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn();

        metric.set(RankMetric::TotalWorkouts);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(names(&board.get()), ["B", "C", "A"]);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_board_at_fire_time() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::TotalWorkouts);
        let handle = Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn();

        // Replace the board after the task started.
        board.set(vec![
            LeaderboardEntry::new("X", 1, 0.0),
            LeaderboardEntry::new("Y", 2, 0.0),
        ]);
        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(names(&board.get()), ["Y", "X"]);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_ranking() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::CaloriesBurned);
        let handle = Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn();

        handle.shutdown().await;
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(names(&board.get()), ["A", "B", "C"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::CaloriesBurned);
        drop(Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn());

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(names(&board.get()), ["A", "B", "C"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_metric_sender_dropped() {
        let board = Container::new(perturbed());
        let metric = Container::new(RankMetric::CaloriesBurned);
        let handle = Ranker::new(board.clone(), metric.subscribe(), Duration::from_secs(5)).spawn();

        drop(metric);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_finished());
    }
}
