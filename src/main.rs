// SPDX-License-Identifier: MIT

//! Coach Scribe API Server
//!
//! Serves the plan catalog, device activation and coaching-session endpoints,
//! plus an optional Google OAuth login flow.

use std::sync::Arc;

use coach_scribe::{config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Coach Scribe API");

    let state = Arc::new(AppState::new(config));
    if state.google.is_some() {
        tracing::info!("Google OAuth configured");
    } else {
        tracing::warn!("Google OAuth not configured, /auth/google/* will return not_implemented");
    }

    // Build router
    let app = coach_scribe::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coach_scribe=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
