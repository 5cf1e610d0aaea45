// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use carbon_tracker::config::Config;
use carbon_tracker::db::MemoryDb;
use carbon_tracker::routes::create_router;
use carbon_tracker::services::FactorTable;
use carbon_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Factor table used across the integration suites.
pub const TEST_FACTORS: &str = r#"{
    "transportation": {
        "car": {"unit": "km", "factor": 0.24},
        "bus": {"unit": "km", "factor": 0.1},
        "bike": {"unit": "km", "factor": 0.0}
    },
    "food": {
        "beef": {"unit": "serving", "factor": 6.6},
        "vegan": {"unit": "serving", "factor": 0.4}
    },
    "energy": {
        "electricity": {"unit": "kWh", "factor": 0.43}
    },
    "waste": {
        "landfill": {"unit": "kg", "factor": 0.58}
    }
}"#;

/// Create a test app with an empty in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let factors = FactorTable::load_from_json(TEST_FACTORS).expect("test factor table loads");

    let state = Arc::new(AppState {
        config,
        factors,
        db: MemoryDb::new(),
    });

    (create_router(state.clone()), state)
}

/// POST a JSON body and return the response.
#[allow(dead_code)]
pub async fn post_json(app: &axum::Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a URI and return the response.
#[allow(dead_code)]
pub async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// DELETE a URI and return the response.
#[allow(dead_code)]
pub async fn delete(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Parse a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
