// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record and submission payload models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Category;

/// A single logged activity with its computed CO₂ contribution.
///
/// Immutable once created: corrections are new records or deletions,
/// never in-place edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Record ID. Assigned by the repository when first saved; 0 until then.
    pub id: u64,
    /// Owner of the record
    pub user_id: u64,
    pub category: Category,
    pub activity_type: String,
    pub quantity: f64,
    /// Unit carried over from the matching factor table entry
    pub unit: String,
    /// quantity × factor, unrounded
    pub co2_kg: f64,
    /// Date the activity was logged for (date granularity)
    pub logged_at: NaiveDate,
}

/// One (activity_type, quantity) pair within a category list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivityEntry {
    #[validate(length(min = 1, max = 64))]
    pub activity_type: String,
    pub quantity: f64,
}

/// Submitted activity payload: one ordered list of entries per known
/// category. Absent categories deserialize as empty lists.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActivityPayload {
    #[serde(default)]
    #[validate(nested)]
    pub transportation: Vec<ActivityEntry>,
    #[serde(default)]
    #[validate(nested)]
    pub food: Vec<ActivityEntry>,
    #[serde(default)]
    #[validate(nested)]
    pub energy: Vec<ActivityEntry>,
    #[serde(default)]
    #[validate(nested)]
    pub waste: Vec<ActivityEntry>,
}

impl ActivityPayload {
    /// Iterate all entries tagged with their category, in payload order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &ActivityEntry)> {
        self.transportation
            .iter()
            .map(|e| (Category::Transportation, e))
            .chain(self.food.iter().map(|e| (Category::Food, e)))
            .chain(self.energy.iter().map(|e| (Category::Energy, e)))
            .chain(self.waste.iter().map(|e| (Category::Waste, e)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_entries_in_category_order() {
        let payload: ActivityPayload = serde_json::from_str(
            r#"{
                "waste": [{"activity_type": "landfill", "quantity": 2.0}],
                "transportation": [
                    {"activity_type": "car", "quantity": 10.0},
                    {"activity_type": "bus", "quantity": 5.0}
                ]
            }"#,
        )
        .unwrap();

        let entries: Vec<(Category, String)> = payload
            .entries()
            .map(|(c, e)| (c, e.activity_type.clone()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (Category::Transportation, "car".to_string()),
                (Category::Transportation, "bus".to_string()),
                (Category::Waste, "landfill".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_categories_are_empty() {
        let payload: ActivityPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_validation_rejects_oversized_activity_type() {
        let payload = ActivityPayload {
            transportation: vec![ActivityEntry {
                activity_type: "a".repeat(65),
                quantity: 1.0,
            }],
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
