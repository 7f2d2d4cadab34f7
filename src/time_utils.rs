// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{NaiveDate, Utc};

/// Calendar date used to key chart points ("YYYY-MM-DD" in UTC).
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a chart date key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
