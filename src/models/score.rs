// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived scoring types: never persisted, recomputed on read.

use serde::{Deserialize, Serialize};

use crate::models::BadgeTier;

/// Result of scoring a current total against a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    /// Green score in [0, 1000], higher is better
    pub green_score: f64,
    /// Fractional reduction versus baseline; 0 when baseline is 0
    pub reduction: f64,
    /// Tier the reduction qualifies for, if any
    pub badge_tier: Option<BadgeTier>,
}

/// Input row for the leaderboard ranker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub user_id: u64,
    pub green_score: f64,
}

/// One leaderboard row with its competition rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry {
    pub user_id: u64,
    pub green_score: f64,
    /// 1-based; tied scores share a rank, the next distinct score skips
    /// the tied count
    pub rank: u32,
}
