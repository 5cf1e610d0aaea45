// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carbon-Tracker API Server
//!
//! Logs daily activities (transportation, food, energy, waste), converts
//! them to CO₂-equivalent emissions, and derives Green Scores, badges,
//! and a cross-user leaderboard.

use carbon_tracker::{config::Config, db::MemoryDb, services::FactorTable, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Carbon-Tracker API");

    // Load the emission factor table
    tracing::info!(path = %config.factors_path, "Loading emission factors");
    let factors =
        FactorTable::load_from_file(&config.factors_path).expect("Failed to load emission factors");
    tracing::info!(count = factors.len(), "Emission factors loaded");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        factors,
        db: MemoryDb::new(),
    });

    // Build router
    let app = carbon_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carbon_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
