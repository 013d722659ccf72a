// SPDX-License-Identifier: MIT

//! Plan catalog routes.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::models::Plan;
use crate::response::Envelope;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/plans/list", get(list_plans))
}

/// List the fixed plan catalog.
async fn list_plans() -> Envelope<Vec<Plan>> {
    Envelope::new(Plan::catalog())
}
