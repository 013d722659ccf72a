// SPDX-License-Identifier: MIT

//! Device activation routes.

use axum::{body::Bytes, extract::State, routing::post, Extension, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::plan::resolve_activation_code;
use crate::models::{ActivationRecord, CallerIdentity};
use crate::response::Envelope;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/device/activate", post(activate))
}

#[derive(Default, Deserialize)]
struct ActivateBody {
    #[serde(default)]
    code: Option<String>,
}

/// Redeem an activation code, (re)setting the caller's plan quota.
///
/// A failed lookup leaves any existing activation untouched; a successful one
/// overwrites it, so re-activation resets rather than accumulates quota.
async fn activate(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<CallerIdentity>,
    body: Bytes,
) -> Result<Envelope<ActivationRecord>> {
    // Absent or malformed bodies are treated as empty, like missing fields
    let body: ActivateBody = serde_json::from_slice(&body).unwrap_or_default();

    let code = body
        .code
        .filter(|code| !code.trim().is_empty())
        .ok_or(AppError::MissingCode)?;

    let plan = resolve_activation_code(&code).ok_or(AppError::InvalidToken)?;

    let record = ActivationRecord::for_plan(plan);
    state.activations.put(identity.clone(), record.clone());

    tracing::info!(identity = %identity, plan = ?plan, "Device activated");

    Ok(Envelope::new(record))
}
