// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness Tracker: client-local workout, goal, and leaderboard tracking
//!
//! This crate holds one user's session state, persists it to a local
//! key-value store, and serves it to a thin browser front end.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod time_utils;

use config::Config;
use services::BroadcastChart;
use state::Session;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub chart: Arc<BroadcastChart>,
    shutdown: watch::Sender<bool>,
}

impl AppState {
    pub fn new(config: Config, session: Session, chart: Arc<BroadcastChart>) -> Self {
        let (shutdown, _rx) = watch::channel(false);
        Self {
            config,
            session,
            chart,
            shutdown,
        }
    }

    /// Signal long-lived responses (chart streams) to finish.
    pub fn begin_shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// Resolves once [`AppState::begin_shutdown`] has been called.
    pub fn shutdown_signal(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.shutdown.subscribe();
        async move {
            // Err means the state itself is gone, which is also a shutdown.
            let _ = rx.wait_for(|stopping| *stopping).await;
        }
    }
}
