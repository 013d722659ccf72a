// SPDX-License-Identifier: MIT

//! Caller-identity middleware.
//!
//! Every request is assigned a stable [`CallerIdentity`], carried in an
//! HMAC-signed cookie. A missing or tampered cookie mints a fresh anonymous
//! identity and re-sets the cookie on the way out.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::models::CallerIdentity;
use crate::AppState;

/// Name of the session cookie carrying the signed caller identity.
pub const SESSION_COOKIE: &str = "scribe_session";

type HmacSha256 = Hmac<Sha256>;

/// Attach a caller identity to the request extensions.
pub async fn attach_identity(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let verified = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| verify_cookie_value(cookie.value(), &state.config.session_secret));

    let (identity, fresh) = match verified {
        Some(identity) => (identity, false),
        None => (CallerIdentity::anonymous(), true),
    };

    request.extensions_mut().insert(identity.clone());
    let mut response = next.run(request).await;

    if fresh {
        let cookie = session_cookie(&identity, &state.config.session_secret);
        if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Build the signed session cookie for an identity.
pub fn session_cookie(identity: &CallerIdentity, secret: &[u8]) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, signed_cookie_value(identity, secret)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Build an expired session cookie, clearing the caller's identity.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Sign an identity: base64url("identity|signature_hex").
pub fn signed_cookie_value(identity: &CallerIdentity, secret: &[u8]) -> String {
    // HMAC-SHA256 accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC key length");
    mac.update(identity.as_str().as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    URL_SAFE_NO_PAD.encode(format!("{}|{}", identity.as_str(), signature))
}

/// Verify a cookie value and recover the identity. `None` on any mismatch.
pub fn verify_cookie_value(value: &str, secret: &[u8]) -> Option<CallerIdentity> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;

    let (identity, signature_hex) = decoded.rsplit_once('|')?;

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(identity.as_bytes());
    let expected = hex::encode(mac.finalize().into_bytes());

    if signature_hex != expected {
        tracing::warn!("Session cookie signature mismatch");
        return None;
    }

    Some(CallerIdentity::from_raw(identity))
}
