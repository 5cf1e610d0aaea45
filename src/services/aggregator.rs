// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Window aggregation over activity records.
//!
//! Pure summation: no weighting, no decay. Commutative over record order
//! and idempotent, so recomputing from the full record set on demand is
//! always safe.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, Category, Window, WindowAggregate};

/// Sum a user's records falling inside the half-open window.
///
/// Records owned by other users are skipped, so a mixed slice may be
/// passed. An empty window yields a zero-valued aggregate.
pub fn aggregate(user_id: u64, records: &[ActivityRecord], window: Window) -> WindowAggregate {
    let mut co2_by_category: HashMap<Category, f64> =
        Category::ALL.iter().map(|&c| (c, 0.0)).collect();

    for record in in_window(user_id, records, window) {
        *co2_by_category.entry(record.category).or_insert(0.0) += record.co2_kg;
    }

    // Total derived from the category sums keeps the invariant exact
    let total_co2_kg: f64 = co2_by_category.values().sum();

    WindowAggregate {
        user_id,
        period_start: window.start,
        period_end: window.end,
        total_co2_kg,
        co2_by_category,
    }
}

/// Strict variant: fails when no records fall in the window.
///
/// The routes use the zero-default form; this is for callers that treat
/// an empty window as an error.
pub fn aggregate_nonempty(
    user_id: u64,
    records: &[ActivityRecord],
    window: Window,
) -> Result<WindowAggregate> {
    if in_window(user_id, records, window).next().is_none() {
        return Err(AppError::EmptyWindow);
    }
    Ok(aggregate(user_id, records, window))
}

/// Per-day totals over a user's full record set, ordered by date.
pub fn daily_totals(user_id: u64, records: &[ActivityRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in records.iter().filter(|r| r.user_id == user_id) {
        *totals.entry(record.logged_at).or_insert(0.0) += record.co2_kg;
    }
    totals
}

fn in_window<'a>(
    user_id: u64,
    records: &'a [ActivityRecord],
    window: Window,
) -> impl Iterator<Item = &'a ActivityRecord> {
    records
        .iter()
        .filter(move |r| r.user_id == user_id && window.contains(r.logged_at))
}
