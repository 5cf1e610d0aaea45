// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cross-user ranking with competition ("1224") rank assignment.

use std::cmp::Ordering;

use crate::models::{RankedEntry, ScoreSnapshot};

/// Rank score snapshots: green score descending, ties broken by user_id
/// ascending. Tied scores share a rank and the next distinct score skips
/// the tied count (900, 900, 800 → 1, 1, 3).
///
/// Deterministic and restartable: the input is not mutated, and two runs
/// over the same snapshots produce the same order.
pub fn rank(snapshots: &[ScoreSnapshot]) -> Vec<RankedEntry> {
    let mut sorted = snapshots.to_vec();
    sorted.sort_by(|a, b| {
        b.green_score
            .partial_cmp(&a.green_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let mut entries: Vec<RankedEntry> = Vec::with_capacity(sorted.len());
    for (position, snapshot) in sorted.iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.green_score == snapshot.green_score => prev.rank,
            _ => position as u32 + 1,
        };
        entries.push(RankedEntry {
            user_id: snapshot.user_id,
            green_score: snapshot.green_score,
            rank,
        });
    }
    entries
}
