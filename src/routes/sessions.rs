// SPDX-License-Identifier: MIT

//! Coaching session routes.

use axum::{body::Bytes, extract::State, routing::post, Extension, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::session::{SessionReport, DEFAULT_SUMMARY};
use crate::models::{CallerIdentity, SessionRecord};
use crate::response::Envelope;
use crate::store::ConsumeError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions/start", post(start_session))
        .route("/sessions/finish", post(finish_session))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartSessionResponse {
    session_id: String,
    sessions_remaining: u32,
}

/// Start a coaching session, consuming one unit of the caller's quota.
///
/// The quota check and decrement happen atomically in the store, so two
/// racing starts can never spend the same remaining session twice.
async fn start_session(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<CallerIdentity>,
) -> Result<Envelope<StartSessionResponse>> {
    let sessions_remaining =
        state
            .activations
            .consume_session(&identity)
            .map_err(|err| match err {
                ConsumeError::NotActivated => AppError::NotActivated,
                ConsumeError::NoSessions => AppError::NoSessions,
            })?;

    let record = SessionRecord::start_now();
    let session_id = record.session_id.clone();
    state.sessions.insert(record);

    tracing::info!(identity = %identity, session_id = %session_id, "Session started");

    Ok(Envelope::new(StartSessionResponse {
        session_id,
        sessions_remaining,
    }))
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinishSessionBody {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

/// Finish a session and store its summary.
///
/// Re-finishing an already-finished session is accepted and overwrites the
/// stored summary.
async fn finish_session(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Envelope<SessionReport>> {
    // Absent or malformed bodies are treated as empty, like missing fields
    let body: FinishSessionBody = serde_json::from_slice(&body).unwrap_or_default();
    let session_id = body.session_id.ok_or(AppError::InvalidSession)?;

    let summary = body
        .summary
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let stored = state
        .sessions
        .finish(&session_id, summary)
        .ok_or(AppError::InvalidSession)?;

    tracing::info!(session_id = %session_id, "Session finished");

    Ok(Envelope::new(SessionReport::with_summary(stored)))
}
