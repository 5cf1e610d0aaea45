// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the emissions and scoring engine.
//!
//! Every operation here is a pure function of its explicit inputs; the
//! only shared state is the factor table, immutable after load.

pub mod aggregator;
pub mod calculator;
pub mod factors;
pub mod leaderboard;
pub mod scoring;

pub use factors::FactorTable;
