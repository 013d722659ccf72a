// SPDX-License-Identifier: MIT

//! Device activation endpoint tests.

use axum::http::StatusCode;
use coach_scribe::models::CallerIdentity;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_activate_missing_code() {
    let (app, state) = common::create_test_app();
    let identity = CallerIdentity::anonymous();

    // No body at all
    let response = common::post_json(&app, &state, &identity, "/device/activate", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"]["code"], "missing_code");

    // Empty code
    let response = common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"]["code"], "missing_code");
}

#[tokio::test]
async fn test_activate_invalid_code_leaves_record_unchanged() {
    let (app, state) = common::create_test_app();
    let identity = CallerIdentity::anonymous();

    // Activate first, then fail with an unknown code
    let response = common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "TOKEN123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "TOKEN999" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"]["code"], "invalid_token");

    // Prior activation untouched
    let record = state.activations.get(&identity).unwrap();
    assert_eq!(record.sessions_remaining, 20);
}

#[tokio::test]
async fn test_activate_is_case_insensitive() {
    let (app, state) = common::create_test_app();
    let identity = CallerIdentity::anonymous();

    let response = common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "token456" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["plan"], "pro");
    assert_eq!(body["data"]["sessionsRemaining"], 50);
}

#[tokio::test]
async fn test_reactivation_resets_quota() {
    let (app, state) = common::create_test_app();
    let identity = CallerIdentity::anonymous();

    common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "TOKEN456" }),
    )
    .await;

    // Spend one session, then re-activate with a different plan
    common::post_json(&app, &state, &identity, "/sessions/start", json!({})).await;
    assert_eq!(state.activations.get(&identity).unwrap().sessions_remaining, 49);

    let response = common::post_json(
        &app,
        &state,
        &identity,
        "/device/activate",
        json!({ "code": "TOKEN789" }),
    )
    .await;

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["plan"], "premium");
    // Reset to the full premium quota, not 49 + 100
    assert_eq!(body["data"]["sessionsRemaining"], 100);
}
