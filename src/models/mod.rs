// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod aggregate;
pub mod badge;
pub mod factor;
pub mod score;

pub use activity::{ActivityEntry, ActivityPayload, ActivityRecord};
pub use aggregate::{Window, WindowAggregate};
pub use badge::{Badge, BadgeTier};
pub use factor::{Category, EmissionFactor};
pub use score::{RankedEntry, Score, ScoreSnapshot};
