// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emission calculator: converts a submitted payload into activity records.
//!
//! Validation is eager and all-or-nothing: a payload with one invalid
//! entry produces no records at all, so the caller never persists a
//! partial submission.

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{ActivityPayload, ActivityRecord};
use crate::services::factors::FactorTable;

/// Compute one activity record per payload entry.
///
/// co2_kg is quantity × factor in f64; no rounding happens here, that is
/// a presentation concern. Pure: persistence is the caller's job.
pub fn compute(
    factors: &FactorTable,
    user_id: u64,
    logged_at: NaiveDate,
    payload: &ActivityPayload,
) -> Result<Vec<ActivityRecord>> {
    let mut records = Vec::new();

    for (category, entry) in payload.entries() {
        if entry.quantity < 0.0 || !entry.quantity.is_finite() {
            return Err(AppError::InvalidQuantity {
                category,
                activity_type: entry.activity_type.clone(),
                quantity: entry.quantity,
            });
        }

        let factor = factors.lookup(category, &entry.activity_type)?;

        records.push(ActivityRecord {
            id: 0,
            user_id,
            category,
            activity_type: factor.activity_type.clone(),
            quantity: entry.quantity,
            unit: factor.unit.clone(),
            co2_kg: entry.quantity * factor.factor,
            logged_at,
        });
    }

    Ok(records)
}
