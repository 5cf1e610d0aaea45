// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! The engine surfaces distinct error kinds for every failure; none are
//! retried internally since all are deterministic functions of input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::Category;
use crate::services::factors::FactorError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No emission factor for {category}/{activity_type}")]
    UnknownActivity {
        category: Category,
        activity_type: String,
    },

    #[error("Invalid quantity {quantity} for {category}/{activity_type}")]
    InvalidQuantity {
        category: Category,
        activity_type: String,
        quantity: f64,
    },

    #[error("Invalid baseline: {0}")]
    InvalidBaseline(f64),

    #[error("No records in the requested window")]
    EmptyWindow,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FactorError> for AppError {
    fn from(err: FactorError) -> Self {
        match err {
            FactorError::UnknownActivity {
                category,
                activity_type,
            } => AppError::UnknownActivity {
                category,
                activity_type,
            },
            // Load-time failures reaching a request path are defects
            other => AppError::Internal(anyhow::anyhow!(other)),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::UnknownActivity { .. } => {
                (StatusCode::BAD_REQUEST, "unknown_activity", Some(self.to_string()))
            }
            AppError::InvalidQuantity { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_quantity", Some(self.to_string()))
            }
            AppError::InvalidBaseline(baseline) => {
                tracing::error!(baseline, "Scoring called with negative baseline");
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_baseline", None)
            }
            AppError::EmptyWindow => (StatusCode::NOT_FOUND, "empty_window", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
