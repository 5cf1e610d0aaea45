// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes: activity submission, summaries, badges, leaderboard,
//! and deletion.
//!
//! User identity arrives as an explicit `user_id`; authentication is an
//! external collaborator and not handled here.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{
    ActivityPayload, ActivityRecord, Badge, BadgeTier, RankedEntry, ScoreSnapshot, Window,
    WindowAggregate,
};
use crate::services::{aggregator, calculator, leaderboard, scoring};
use crate::time_utils::today_utc;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(submit_activities))
        .route("/api/activities/{id}", delete(delete_activity))
        .route("/api/summary", get(get_summary))
        .route("/api/badges", get(get_badges))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/users/{user_id}", delete(delete_user))
}

// ─── Activity Submission ─────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SubmitRequest {
    user_id: u64,
    /// Defaults to today (UTC) when absent
    logged_at: Option<NaiveDate>,
    #[serde(flatten)]
    #[validate(nested)]
    payload: ActivityPayload,
}

#[derive(Serialize)]
struct SubmitResponse {
    records: Vec<ActivityRecord>,
    /// Total CO₂ for this submission only
    total_co2_kg: f64,
    trees_to_offset: u64,
    /// Badge newly earned by this submission, if any
    badge: Option<Badge>,
}

/// Submit an activity payload: compute records, persist them
/// all-or-nothing, and award at most the highest newly-crossed badge tier.
async fn submit_activities(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let logged_at = req.logged_at.unwrap_or_else(today_utc);

    let records = calculator::compute(&state.factors, req.user_id, logged_at, &req.payload)?;
    let total_co2_kg: f64 = records.iter().map(|r| r.co2_kg).sum();

    tracing::info!(
        user_id = req.user_id,
        count = records.len(),
        total_co2_kg,
        "Processing activity submission"
    );

    let records = state.db.save_records(records);

    let badge = if records.is_empty() {
        None
    } else {
        award_badge(&state, req.user_id, logged_at)?
    };

    Ok(Json(SubmitResponse {
        total_co2_kg,
        trees_to_offset: scoring::trees_to_offset(total_co2_kg, state.config.tree_co2_kg_per_year),
        records,
        badge,
    }))
}

/// Score the submission day against the user's baseline and persist the
/// qualifying tier, if it was not already earned that day.
///
/// Only the highest crossed tier is awarded per submission.
fn award_badge(state: &AppState, user_id: u64, day: NaiveDate) -> Result<Option<Badge>> {
    let history = state.db.records_for_user(user_id);

    let day_total = aggregator::aggregate(user_id, &history, Window::single_day(day)).total_co2_kg;
    let baseline = scoring::baseline_for_window(user_id, &history, 1);
    let score = scoring::score(day_total, baseline)?;

    let Some(tier) = score.badge_tier else {
        return Ok(None);
    };
    if state.db.has_badge_on(user_id, tier, day) {
        return Ok(None);
    }

    let badge = Badge {
        user_id,
        tier,
        basis: score.reduction,
        earned_at: day,
    };
    state.db.save_badge(badge.clone());
    tracing::info!(user_id, tier = %tier, basis = score.reduction, "Badge awarded");

    Ok(Some(badge))
}

/// Delete one activity record (explicit user action).
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<u64>,
    Query(params): Query<UserQuery>,
) -> Result<Json<DeleteResponse>> {
    if !state.db.delete_record(params.user_id, record_id) {
        return Err(AppError::NotFound(format!("Record {} not found", record_id)));
    }

    tracing::info!(user_id = params.user_id, record_id, "Activity record deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Record deleted".to_string(),
    }))
}

// ─── Summary ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct SummaryQuery {
    user_id: u64,
    /// Window start (inclusive); defaults with `end` to the trailing week
    start: Option<NaiveDate>,
    /// Window end (exclusive)
    end: Option<NaiveDate>,
}

#[derive(Serialize)]
struct SummaryResponse {
    aggregate: WindowAggregate,
    green_score: f64,
    reduction: f64,
    badge_tier: Option<BadgeTier>,
    trees_to_offset: u64,
}

/// Aggregate a user's emissions over a window and score the result.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>> {
    let window = match (params.start, params.end) {
        (Some(start), Some(end)) if start < end => Window::new(start, end),
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "'start' must be before 'end'".to_string(),
            ));
        }
        (None, None) => Window::trailing_days(today_utc(), state.config.default_window_days),
        _ => {
            return Err(AppError::BadRequest(
                "'start' and 'end' must be given together".to_string(),
            ));
        }
    };

    tracing::debug!(
        user_id = params.user_id,
        start = %window.start,
        end = %window.end,
        "Computing summary"
    );

    let history = state.db.records_for_user(params.user_id);
    let aggregate = aggregator::aggregate(params.user_id, &history, window);
    let baseline = scoring::baseline_for_window(params.user_id, &history, window.days());
    let score = scoring::score(aggregate.total_co2_kg, baseline)?;

    Ok(Json(SummaryResponse {
        green_score: score.green_score,
        reduction: score.reduction,
        badge_tier: score.badge_tier,
        trees_to_offset: scoring::trees_to_offset(
            aggregate.total_co2_kg,
            state.config.tree_co2_kg_per_year,
        ),
        aggregate,
    }))
}

// ─── Badges ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct UserQuery {
    user_id: u64,
}

#[derive(Serialize)]
struct BadgesResponse {
    badges: Vec<Badge>,
}

/// Badges earned by a user, newest first.
async fn get_badges(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserQuery>,
) -> Result<Json<BadgesResponse>> {
    Ok(Json(BadgesResponse {
        badges: state.db.badges_for_user(params.user_id),
    }))
}

// ─── Leaderboard ─────────────────────────────────────────────

fn default_limit() -> u32 {
    10
}

#[derive(Deserialize, Validate)]
struct LeaderboardQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

#[derive(Serialize)]
struct LeaderboardResponse {
    entries: Vec<RankedEntry>,
    total_users: u32,
}

/// Rank all users by all-time green score.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let snapshots: Vec<ScoreSnapshot> = state
        .db
        .user_ids()
        .into_iter()
        .map(|user_id| {
            let total: f64 = state
                .db
                .records_for_user(user_id)
                .iter()
                .map(|r| r.co2_kg)
                .sum();
            ScoreSnapshot {
                user_id,
                green_score: scoring::green_score(total),
            }
        })
        .collect();

    let ranked = leaderboard::rank(&snapshots);
    let total_users = ranked.len() as u32;

    let entries = ranked
        .into_iter()
        .skip(params.offset as usize)
        .take(params.limit as usize)
        .collect();

    Ok(Json(LeaderboardResponse {
        entries,
        total_users,
    }))
}

// ─── Account Deletion ────────────────────────────────────────

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    message: String,
}

/// Delete a user's records and badges (cascading account deletion).
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    let (records, badges) = state.db.delete_user(user_id);

    tracing::info!(user_id, records, badges, "User data deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Deleted {} records and {} badges", records, badges),
    }))
}
