// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - background tasks and chart plumbing.

pub mod feed;
pub mod ranker;

pub use feed::{BroadcastChart, ChartEvent, ChartSink, NullChart, TimeSeriesFeed};
pub use ranker::{rank, Ranker, RankerHandle};
