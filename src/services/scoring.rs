// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Green score and badge tier computation.
//!
//! Pure functions of their inputs: no hidden state, no randomness.

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, BadgeTier, Score};
use crate::services::aggregator;

/// Score ceiling, reached when current emissions are zero.
const MAX_SCORE: f64 = 1000.0;
/// Score penalty per kilogram of CO₂e.
const SCORE_PER_KG: f64 = 10.0;

/// Reduction thresholds, highest tier first; first match wins.
const TIER_THRESHOLDS: [(BadgeTier, f64); 3] = [
    (BadgeTier::Gold, 0.50),
    (BadgeTier::Silver, 0.30),
    (BadgeTier::Bronze, 0.10),
];

/// Green score for an emission total: max(0, 1000 − total × 10).
pub fn green_score(total_co2_kg: f64) -> f64 {
    (MAX_SCORE - total_co2_kg * SCORE_PER_KG).max(0.0)
}

/// Score a current total against a baseline total.
///
/// A zero baseline leaves the reduction undefined; it is treated as 0%
/// and no badge is awarded. A negative baseline is a misconfiguration.
pub fn score(current_total_co2: f64, baseline_total_co2: f64) -> Result<Score> {
    if baseline_total_co2 < 0.0 || !baseline_total_co2.is_finite() {
        return Err(AppError::InvalidBaseline(baseline_total_co2));
    }

    let reduction = if baseline_total_co2 > 0.0 {
        (baseline_total_co2 - current_total_co2) / baseline_total_co2
    } else {
        0.0
    };

    Ok(Score {
        green_score: green_score(current_total_co2),
        reduction,
        badge_tier: badge_tier_for(reduction),
    })
}

/// First tier whose threshold the reduction meets; boundaries inclusive.
pub fn badge_tier_for(reduction: f64) -> Option<BadgeTier> {
    TIER_THRESHOLDS
        .iter()
        .find(|(_, threshold)| reduction >= *threshold)
        .map(|(tier, _)| *tier)
}

/// Baseline for scoring a window: mean per-day total over the user's full
/// history, scaled to the window length. 0 when the user has no records.
pub fn baseline_for_window(user_id: u64, records: &[ActivityRecord], window_days: i64) -> f64 {
    let totals = aggregator::daily_totals(user_id, records);
    if totals.is_empty() {
        return 0.0;
    }
    let mean_daily: f64 = totals.values().sum::<f64>() / totals.len() as f64;
    mean_daily * window_days.max(0) as f64
}

/// Whole trees needed to offset the given emissions over one year.
pub fn trees_to_offset(total_co2_kg: f64, kg_per_tree_per_year: f64) -> u64 {
    if kg_per_tree_per_year <= 0.0 {
        return 0;
    }
    (total_co2_kg.max(0.0) / kg_per_tree_per_year).ceil() as u64
}
