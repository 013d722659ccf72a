// SPDX-License-Identifier: MIT

//! Concurrent session-start test: with one session remaining, racing starts
//! must yield exactly one success, never a double decrement.

use axum::http::StatusCode;
use coach_scribe::models::{ActivationRecord, CallerIdentity, PlanId};
use serde_json::json;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_starts_single_winner() {
    let (app, state) = common::create_test_app();
    let identity = CallerIdentity::anonymous();

    state.activations.put(
        identity.clone(),
        ActivationRecord {
            plan: PlanId::Basic,
            sessions_remaining: 1,
        },
    );

    let mut handles = Vec::new();
    for _ in 0..8 {
        let app = app.clone();
        let state = state.clone();
        let identity = identity.clone();
        handles.push(tokio::spawn(async move {
            common::post_json(&app, &state, &identity, "/sessions/start", json!({}))
                .await
                .status()
        }));
    }

    let mut ok = 0;
    let mut forbidden = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => ok += 1,
            StatusCode::FORBIDDEN => forbidden += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(forbidden, 7);
    assert_eq!(
        state.activations.get(&identity).unwrap().sessions_remaining,
        0
    );
}
