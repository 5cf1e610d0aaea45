// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carbon-Tracker: log daily activities, track CO₂-equivalent emissions.
//!
//! This crate provides the backend API for converting logged activities
//! into CO₂ totals, scoring them against a baseline, and ranking users
//! on a leaderboard.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryDb;
use services::FactorTable;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Emission factor table, immutable after load
    pub factors: FactorTable,
    pub db: MemoryDb,
}
