//! Application configuration loaded from environment variables.
//!
//! Everything the core consumes comes in through here; handlers never read
//! the environment directly.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for post-login/logout redirects
    pub frontend_url: String,
    /// Extra CORS allow-origin; defaults to the frontend URL
    pub cors_allow_origin: String,
    /// Secret used to sign the session cookie and the OAuth state
    pub session_secret: Vec<u8>,
    /// Server port
    pub port: u16,

    // --- Google OAuth (optional; auth routes are stubbed when absent) ---
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    pub google_callback_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN")
                .unwrap_or_else(|_| frontend_url.clone()),
            frontend_url,
            session_secret: env::var("SESSION_SECRET")
                .map(|v| v.trim().to_string().into_bytes())
                .map_err(|_| ConfigError::Missing("SESSION_SECRET"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10000),
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok(),
            google_client_secret: env::var("GOOGLE_CLIENT_SECRET").ok(),
            google_callback_url: env::var("GOOGLE_CALLBACK_URL").ok(),
        })
    }

    /// Fixed config for tests; no OAuth credentials.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            cors_allow_origin: "http://localhost:5173".to_string(),
            session_secret: b"test_session_secret_32_bytes!!!!".to_vec(),
            port: 10000,
            google_client_id: None,
            google_client_secret: None,
            google_callback_url: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
