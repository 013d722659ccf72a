// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request};
use coach_scribe::config::Config;
use coach_scribe::middleware::identity::{signed_cookie_value, SESSION_COOKIE};
use coach_scribe::models::CallerIdentity;
use coach_scribe::routes::create_router;
use coach_scribe::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with in-memory stores and no OAuth configured.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default()));
    (create_router(state.clone()), state)
}

/// Cookie header value pinning the request to a known caller identity.
#[allow(dead_code)]
pub fn identity_cookie(state: &AppState, identity: &CallerIdentity) -> String {
    format!(
        "{}={}",
        SESSION_COOKIE,
        signed_cookie_value(identity, &state.config.session_secret)
    )
}

/// POST a JSON body as the given caller and return the response.
#[allow(dead_code)]
pub async fn post_json(
    app: &axum::Router,
    state: &AppState,
    identity: &CallerIdentity,
    uri: &str,
    body: serde_json::Value,
) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, identity_cookie(state, identity))
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
