// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date handling.

use chrono::{NaiveDate, Utc};

/// Today's date in UTC; all `logged_at` values are date-granular UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
