// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emission factor model and the closed set of activity categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity categories. The set is closed: payloads and factor documents
/// are typed against these variants, never free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Food,
    Energy,
    Waste,
}

impl Category {
    /// All categories, in payload order.
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Food,
        Category::Energy,
        Category::Waste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Food => "food",
            Category::Energy => "energy",
            Category::Waste => "waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transportation" => Ok(Category::Transportation),
            "food" => Ok(Category::Food),
            "energy" => Ok(Category::Energy),
            "waste" => Ok(Category::Waste),
            _ => Err(()),
        }
    }
}

/// One entry of the emission factor table.
///
/// Keyed uniquely by (category, activity_type). Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub category: Category,
    pub activity_type: String,
    /// Unit the logged quantity is measured in (km, serving, kWh, kg)
    pub unit: String,
    /// Kilograms of CO₂-equivalent per unit; never negative
    pub factor: f64,
}
