// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Badge tiers and earned badge records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Achievement tiers, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}

impl BadgeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
        }
    }

    /// Display name shown to users.
    pub fn title(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "Bronze Earth Friend",
            BadgeTier::Silver => "Silver Green Champion",
            BadgeTier::Gold => "Gold Eco Warrior",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A badge earned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub user_id: u64,
    pub tier: BadgeTier,
    /// Reduction fraction versus baseline that triggered the award
    pub basis: f64,
    pub earned_at: NaiveDate,
}
