// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived per-window emission aggregates.
//!
//! Aggregates are recomputed from the record set on demand, never stored,
//! so there is no staleness or invalidation to manage.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Category;

/// Half-open date interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A window covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day + Duration::days(1),
        }
    }

    /// Trailing n-day window ending on `today` inclusive.
    pub fn trailing_days(today: NaiveDate, n: u32) -> Self {
        Self {
            start: today - Duration::days(i64::from(n) - 1),
            end: today + Duration::days(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of days covered; 0 for degenerate windows.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }
}

/// Per-window emission totals for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowAggregate {
    pub user_id: u64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_co2_kg: f64,
    /// Per-category totals; every known category is present, zero when
    /// nothing was logged for it. Their sum equals `total_co2_kg`.
    pub co2_by_category: HashMap<Category, f64>,
}
