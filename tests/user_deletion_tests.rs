// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record and account deletion integration tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_delete_single_record() {
    let (app, state) = common::create_test_app();

    let response = common::post_json(
        &app,
        "/api/activities",
        json!({
            "user_id": 1,
            "logged_at": "2026-08-08",
            "transportation": [{"activity_type": "car", "quantity": 10.0}]
        }),
    )
    .await;
    let body = common::body_json(response).await;
    let record_id = body["records"][0]["id"].as_u64().unwrap();

    let response =
        common::delete(&app, &format!("/api/activities/{}?user_id=1", record_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(state.db.records_for_user(1).is_empty());
}

#[tokio::test]
async fn test_delete_record_wrong_owner_is_not_found() {
    let (app, state) = common::create_test_app();

    let response = common::post_json(
        &app,
        "/api/activities",
        json!({
            "user_id": 1,
            "logged_at": "2026-08-08",
            "transportation": [{"activity_type": "car", "quantity": 10.0}]
        }),
    )
    .await;
    let body = common::body_json(response).await;
    let record_id = body["records"][0]["id"].as_u64().unwrap();

    let response =
        common::delete(&app, &format!("/api/activities/{}?user_id=2", record_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Record untouched
    assert_eq!(state.db.records_for_user(1).len(), 1);
}

#[tokio::test]
async fn test_delete_missing_record_is_not_found() {
    let (app, _state) = common::create_test_app();

    let response = common::delete(&app, "/api/activities/12345?user_id=1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_account_deletion_cascades() {
    let (app, state) = common::create_test_app();

    // Two days of activity; the light second day earns a badge
    common::post_json(
        &app,
        "/api/activities",
        json!({
            "user_id": 5,
            "logged_at": "2026-08-01",
            "transportation": [{"activity_type": "car", "quantity": 100.0}]
        }),
    )
    .await;
    common::post_json(
        &app,
        "/api/activities",
        json!({
            "user_id": 5,
            "logged_at": "2026-08-02",
            "transportation": [{"activity_type": "bike", "quantity": 5.0}]
        }),
    )
    .await;
    assert_eq!(state.db.badges_for_user(5).len(), 1);

    let response = common::delete(&app, "/api/users/5").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(state.db.records_for_user(5).is_empty());
    assert!(state.db.badges_for_user(5).is_empty());

    // User no longer appears on the leaderboard
    let response = common::get(&app, "/api/leaderboard").await;
    let body = common::body_json(response).await;
    assert!(body["entries"].as_array().unwrap().is_empty());
}
