// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emission factor table loading and lookup.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{Category, EmissionFactor};

/// On-disk shape of one factor entry: `{"unit": "km", "factor": 0.24}`.
#[derive(Deserialize)]
struct FactorDocEntry {
    unit: String,
    factor: f64,
}

/// Immutable lookup table from (category, activity_type) to emission factor.
///
/// Loaded and validated once at startup, then shared read-only for the
/// process lifetime. Activity types are matched case-insensitively.
#[derive(Default, Clone)]
pub struct FactorTable {
    factors: HashMap<(Category, String), EmissionFactor>,
}

impl FactorTable {
    /// Load the factor table from a JSON document on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FactorError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| FactorError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the factor table from a JSON string.
    ///
    /// The document maps category → activity_type → {unit, factor}.
    /// Validation rejects unknown categories, negative or non-finite
    /// factors, and duplicate (category, activity_type) keys.
    pub fn load_from_json(json_data: &str) -> Result<Self, FactorError> {
        let doc: HashMap<String, HashMap<String, FactorDocEntry>> =
            serde_json::from_str(json_data).map_err(|e| FactorError::Parse(e.to_string()))?;

        let mut factors = HashMap::new();

        for (category_key, entries) in doc {
            let category: Category = category_key
                .parse()
                .map_err(|_| FactorError::UnknownCategory(category_key.clone()))?;

            for (activity_type, entry) in entries {
                let activity_type = activity_type.to_ascii_lowercase();

                if entry.factor < 0.0 || !entry.factor.is_finite() {
                    return Err(FactorError::InvalidFactor {
                        category,
                        activity_type,
                        factor: entry.factor,
                    });
                }

                let previous = factors.insert(
                    (category, activity_type.clone()),
                    EmissionFactor {
                        category,
                        activity_type: activity_type.clone(),
                        unit: entry.unit,
                        factor: entry.factor,
                    },
                );
                if previous.is_some() {
                    return Err(FactorError::DuplicateEntry {
                        category,
                        activity_type,
                    });
                }
            }
        }

        tracing::info!(count = factors.len(), "Loaded emission factors");
        Ok(Self { factors })
    }

    /// Look up the factor for a (category, activity_type) pair.
    ///
    /// Never falls back to a default factor: an unregistered pair is an
    /// error the caller surfaces as a submission rejection.
    pub fn lookup(
        &self,
        category: Category,
        activity_type: &str,
    ) -> Result<&EmissionFactor, FactorError> {
        self.factors
            .get(&(category, activity_type.to_ascii_lowercase()))
            .ok_or_else(|| FactorError::UnknownActivity {
                category,
                activity_type: activity_type.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Errors from factor table operations.
#[derive(Debug, thiserror::Error)]
pub enum FactorError {
    #[error("Failed to read factor table: {0}")]
    Io(String),

    #[error("Failed to parse factor table: {0}")]
    Parse(String),

    #[error("Unknown category in factor table: {0}")]
    UnknownCategory(String),

    #[error("Invalid factor {factor} for {category}/{activity_type}")]
    InvalidFactor {
        category: Category,
        activity_type: String,
        factor: f64,
    },

    #[error("Duplicate factor entry for {category}/{activity_type}")]
    DuplicateEntry {
        category: Category,
        activity_type: String,
    },

    #[error("No emission factor for {category}/{activity_type}")]
    UnknownActivity {
        category: Category,
        activity_type: String,
    },
}
