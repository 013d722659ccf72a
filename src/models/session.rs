// SPDX-License-Identifier: MIT

//! Coaching session records.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Summary stored when a session finishes without one supplied.
pub const DEFAULT_SUMMARY: &str = "Sesión finalizada";

/// A started coaching session. Records are kept for the process lifetime,
/// independent of the caller's activation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub start: DateTime<Utc>,
    pub finished: bool,
    /// Present only after finish
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SessionRecord {
    /// Start a new session now, with a fresh unguessable id.
    pub fn start_now() -> Self {
        Self {
            session_id: new_session_id(),
            start: Utc::now(),
            finished: false,
            summary: None,
        }
    }
}

/// Generate an opaque session token: 16 random bytes, base64url.
///
/// Random rather than timestamp-derived so tokens are not predictable from
/// earlier ones.
fn new_session_id() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes))
}

/// Structured report returned when a session finishes.
///
/// The list fields are populated by an analysis step outside this backend;
/// here they are always empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub summary: String,
    pub topics: Vec<String>,
    pub emotions: Vec<String>,
    pub obstacles: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub reflection_questions: Vec<String>,
    pub markers: Vec<String>,
}

impl SessionReport {
    pub fn with_summary(summary: String) -> Self {
        Self {
            summary,
            ..Default::default()
        }
    }
}
