// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard integration tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

async fn log_car_km(app: &axum::Router, user_id: u64, km: f64) {
    let response = common::post_json(
        app,
        "/api/activities",
        json!({
            "user_id": user_id,
            "logged_at": "2026-08-08",
            "transportation": [{"activity_type": "car", "quantity": km}]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ties_share_rank_and_next_skips() {
    let (app, _state) = common::create_test_app();

    // Users 2 and 1 tie; user 3 trails. Submission order must not matter.
    log_car_km(&app, 2, 50.0).await;
    log_car_km(&app, 1, 50.0).await;
    log_car_km(&app, 3, 100.0).await;

    let response = common::get(&app, "/api/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    // Tie broken by ascending user_id; rank skips the tied count
    assert_eq!(entries[0]["user_id"].as_u64().unwrap(), 1);
    assert_eq!(entries[0]["rank"].as_u64().unwrap(), 1);
    assert_eq!(entries[1]["user_id"].as_u64().unwrap(), 2);
    assert_eq!(entries[1]["rank"].as_u64().unwrap(), 1);
    assert_eq!(entries[2]["user_id"].as_u64().unwrap(), 3);
    assert_eq!(entries[2]["rank"].as_u64().unwrap(), 3);

    assert_eq!(
        entries[0]["green_score"].as_f64().unwrap(),
        entries[1]["green_score"].as_f64().unwrap()
    );
    assert!(entries[1]["green_score"].as_f64().unwrap() > entries[2]["green_score"].as_f64().unwrap());
}

#[tokio::test]
async fn test_lower_emissions_rank_higher() {
    let (app, _state) = common::create_test_app();

    log_car_km(&app, 10, 200.0).await;
    log_car_km(&app, 20, 10.0).await;

    let response = common::get(&app, "/api/leaderboard").await;
    let body = common::body_json(response).await;

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["user_id"].as_u64().unwrap(), 20);
    assert_eq!(entries[1]["user_id"].as_u64().unwrap(), 10);
}

#[tokio::test]
async fn test_pagination() {
    let (app, _state) = common::create_test_app();

    for user_id in 1..=5 {
        log_car_km(&app, user_id, user_id as f64 * 10.0).await;
    }

    let response = common::get(&app, "/api/leaderboard?limit=2&offset=2").await;
    let body = common::body_json(response).await;

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(body["total_users"].as_u64().unwrap(), 5);
    // Scores descend with user_id here, so page two starts at user 3
    assert_eq!(entries[0]["user_id"].as_u64().unwrap(), 3);
    assert_eq!(entries[1]["user_id"].as_u64().unwrap(), 4);
}

#[tokio::test]
async fn test_empty_leaderboard() {
    let (app, _state) = common::create_test_app();

    let response = common::get(&app, "/api/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert!(body["entries"].as_array().unwrap().is_empty());
    assert_eq!(body["total_users"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_limit_is_capped() {
    let (app, _state) = common::create_test_app();

    let response = common::get(&app, "/api/leaderboard?limit=1000").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_zero_limit_rejected() {
    let (app, _state) = common::create_test_app();

    let response = common::get(&app, "/api/leaderboard?limit=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
