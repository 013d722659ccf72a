// SPDX-License-Identifier: MIT

//! Google OAuth authentication routes.
//!
//! When OAuth is not configured these routes answer `not_implemented`;
//! logout still works for anonymous (cookie-only) callers.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Extension, Router,
};
use axum_extra::extract::cookie::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AppError, Result};
use crate::middleware::identity::{clear_session_cookie, session_cookie};
use crate::models::CallerIdentity;
use crate::services::GoogleAuthService;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/google/start", get(auth_start))
        .route("/auth/google/callback", get(auth_callback))
        .route("/auth/failure", get(auth_failure))
        .route("/auth/logout", get(logout))
}

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Query parameters for starting the OAuth flow.
#[derive(Deserialize)]
pub struct AuthStartParams {
    /// Frontend URL to redirect back to after OAuth completes.
    /// If not provided, uses the configured frontend URL.
    #[serde(default)]
    redirect_uri: Option<String>,
}

fn require_google(state: &AppState) -> Result<&GoogleAuthService> {
    state
        .google
        .as_ref()
        .ok_or(AppError::NotImplemented("Google OAuth is not configured"))
}

/// Start the OAuth flow - redirect to Google authorization.
async fn auth_start(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuthStartParams>,
) -> Result<Redirect> {
    let google = require_google(&state)?;

    let frontend_url = params
        .redirect_uri
        .unwrap_or_else(|| state.config.frontend_url.clone());

    // Encode frontend URL + timestamp in the signed state
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))?
        .as_millis();

    let state_payload = format!("{}|{:x}", frontend_url, timestamp);

    let mut mac = HmacSha256::new_from_slice(&state.config.session_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("HMAC init failed: {}", e)))?;
    mac.update(state_payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    let signed_state = format!("{}|{}", state_payload, hex::encode(signature));
    let oauth_state = URL_SAFE_NO_PAD.encode(signed_state.as_bytes());

    tracing::info!(frontend_url = %frontend_url, "Starting OAuth flow, redirecting to Google");

    Ok(Redirect::temporary(&google.authorize_url(&oauth_state)))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    state: String,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback - exchange the code, bind the session cookie, redirect home.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(CookieJar, Redirect)> {
    let google = require_google(&state)?;

    // Decode and verify frontend URL from the state parameter
    let frontend_url = verify_and_decode_state(&params.state, &state.config.session_secret)
        .unwrap_or_else(|| {
            tracing::warn!(
                "Invalid or tampered state parameter, falling back to default frontend URL"
            );
            state.config.frontend_url.clone()
        });

    // Check for OAuth errors from the provider
    if let Some(error) = params.error {
        tracing::warn!(error = %error, "OAuth error from Google");
        return Ok((jar, Redirect::temporary("/auth/failure")));
    }

    let Some(code) = params.code else {
        tracing::warn!("OAuth callback without authorization code");
        return Ok((jar, Redirect::temporary("/auth/failure")));
    };

    tracing::info!("Exchanging authorization code for tokens");

    let profile = match google.exchange_code(&code).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "OAuth code exchange failed");
            return Ok((jar, Redirect::temporary("/auth/failure")));
        }
    };

    let identity = CallerIdentity::from_subject("google", &profile.sub);
    tracing::info!(identity = %identity, "OAuth successful");

    let jar = jar.add(session_cookie(&identity, &state.config.session_secret));
    Ok((jar, Redirect::temporary(&frontend_url)))
}

/// OAuth failure route.
async fn auth_failure() -> AppError {
    AppError::OauthFailure
}

/// Logout - drop the caller's activation and clear the session cookie.
/// Session records are retained; only the activation is removed, so the
/// device must be re-activated after logging back in.
async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<CallerIdentity>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    state.activations.remove(&identity);
    tracing::info!(identity = %identity, "Logged out, activation cleared");

    let jar = jar.add(clear_session_cookie());
    (jar, Redirect::temporary(&state.config.frontend_url))
}

/// Verify the HMAC signature and decode the frontend URL from the OAuth state.
fn verify_and_decode_state(state: &str, secret: &[u8]) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(state).ok()?;
    let state_str = String::from_utf8(bytes).ok()?;

    // Format is "frontend_url|timestamp_hex|signature_hex"
    let parts: Vec<&str> = state_str.splitn(3, '|').collect();
    if parts.len() != 3 {
        return None;
    }

    let frontend_url = parts[0];
    let timestamp_hex = parts[1];
    let signature_hex = parts[2];

    let payload = format!("{}|{}", frontend_url, timestamp_hex);

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(payload.as_bytes());

    let expected_signature = hex::encode(mac.finalize().into_bytes());

    if signature_hex != expected_signature {
        tracing::error!("OAuth state signature mismatch");
        return None;
    }

    Some(frontend_url.to_string())
}
