// SPDX-License-Identifier: MIT

//! Coach Scribe backend: plans, device activation and coaching sessions.
//!
//! This crate provides the HTTP API behind the Coach Scribe app. State is
//! held in process memory; callers are identified by a signed session cookie.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use config::Config;
use services::GoogleAuthService;
use store::{ActivationStore, SessionLedger};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activations: Arc<dyn ActivationStore>,
    pub sessions: Arc<dyn SessionLedger>,
    /// `None` when Google OAuth is not configured; the auth routes then
    /// answer `not_implemented`.
    pub google: Option<GoogleAuthService>,
}

impl AppState {
    /// Assemble state with fresh in-memory stores.
    pub fn new(config: Config) -> Self {
        let google = GoogleAuthService::from_config(&config);
        Self {
            config,
            activations: Arc::new(store::MemoryActivationStore::new()),
            sessions: Arc::new(store::MemorySessionLedger::new()),
            google,
        }
    }
}
