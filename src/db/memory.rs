// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory repository backed by concurrent maps.
//!
//! Mirrors the operation surface a document store would offer: batch
//! record saves, per-user reads, badge storage, and cascading deletion.
//! All operations are infallible here, so they return values directly
//! rather than Results.

use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::models::{ActivityRecord, Badge, BadgeTier};

/// Shared in-memory database. Cheap to clone; clones share storage.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    /// user_id → activity records, in insertion order
    activities: DashMap<u64, Vec<ActivityRecord>>,
    /// user_id → earned badges, in award order
    badges: DashMap<u64, Vec<Badge>>,
    last_record_id: AtomicU64,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Activity Records ────────────────────────────────────────

    /// Save a batch of records, assigning ids. All records land together:
    /// callers validate the whole submission before calling, so there is
    /// no partial-application path.
    pub fn save_records(&self, records: Vec<ActivityRecord>) -> Vec<ActivityRecord> {
        let saved: Vec<ActivityRecord> = records
            .into_iter()
            .map(|mut record| {
                record.id = self.inner.last_record_id.fetch_add(1, Ordering::Relaxed) + 1;
                record
            })
            .collect();

        for record in &saved {
            self.inner
                .activities
                .entry(record.user_id)
                .or_default()
                .push(record.clone());
        }

        saved
    }

    /// All records for one user, in insertion order.
    pub fn records_for_user(&self, user_id: u64) -> Vec<ActivityRecord> {
        self.inner
            .activities
            .get(&user_id)
            .map(|records| records.value().clone())
            .unwrap_or_default()
    }

    /// Records across all users (for leaderboard computation).
    pub fn all_records(&self) -> Vec<ActivityRecord> {
        self.inner
            .activities
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect()
    }

    /// Users that have logged at least one record.
    pub fn user_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .inner
            .activities
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| *entry.key())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Delete one record owned by the user. Returns false when the record
    /// does not exist or belongs to someone else.
    pub fn delete_record(&self, user_id: u64, record_id: u64) -> bool {
        match self.inner.activities.get_mut(&user_id) {
            Some(mut records) => {
                let before = records.len();
                records.retain(|r| r.id != record_id);
                records.len() < before
            }
            None => false,
        }
    }

    // ─── Badges ──────────────────────────────────────────────────

    pub fn save_badge(&self, badge: Badge) {
        self.inner
            .badges
            .entry(badge.user_id)
            .or_default()
            .push(badge);
    }

    /// Badges for a user, newest first.
    pub fn badges_for_user(&self, user_id: u64) -> Vec<Badge> {
        let mut badges = self
            .inner
            .badges
            .get(&user_id)
            .map(|badges| badges.value().clone())
            .unwrap_or_default();
        badges.sort_by(|a, b| b.earned_at.cmp(&a.earned_at));
        badges
    }

    /// Whether the user already earned this tier on the given date.
    pub fn has_badge_on(&self, user_id: u64, tier: BadgeTier, date: NaiveDate) -> bool {
        self.inner
            .badges
            .get(&user_id)
            .is_some_and(|badges| badges.iter().any(|b| b.tier == tier && b.earned_at == date))
    }

    // ─── Account Deletion ────────────────────────────────────────

    /// Cascading deletion of everything the user owns.
    /// Returns (records deleted, badges deleted).
    pub fn delete_user(&self, user_id: u64) -> (usize, usize) {
        let records = self
            .inner
            .activities
            .remove(&user_id)
            .map(|(_, records)| records.len())
            .unwrap_or(0);
        let badges = self
            .inner
            .badges
            .remove(&user_id)
            .map(|(_, badges)| badges.len())
            .unwrap_or(0);
        (records, badges)
    }
}
