// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Tracker local server
//!
//! Hosts a single user session on this machine and serves it to the
//! browser UI over a loopback HTTP listener.

use fitness_tracker::{
    config::Config, services::BroadcastChart, state::Session, store::FileStore, AppState,
};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(port = config.port, "Starting Fitness Tracker");

    // Open the local snapshot store and restore the session
    let store = Arc::new(FileStore::open(&config.data_dir).with_context(|| {
        format!("Failed to open data directory {}", config.data_dir.display())
    })?);
    let chart = Arc::new(BroadcastChart::new());
    let session = Session::open(store, chart.clone());

    // Leaderboard re-ranking runs for as long as the server does
    let ranker = session.spawn_ranker(config.leaderboard_interval);

    let state = Arc::new(AppState::new(config.clone(), session, chart));
    let app = fitness_tracker::routes::create_router(state.clone());

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Server listening");

    let shutdown_state = state.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            }
            tracing::info!("Shutdown requested");
            shutdown_state.begin_shutdown();
        })
        .await?;

    ranker.shutdown().await;
    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
