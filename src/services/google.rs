// SPDX-License-Identifier: MIT

//! Google OAuth client.
//!
//! Handles the code-for-token exchange and the userinfo lookup. The rest of
//! the login flow (state signing, cookies, redirects) lives in the auth routes.

use anyhow::Context;
use serde::Deserialize;

use crate::config::Config;

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Google OAuth client, constructed only when fully configured.
#[derive(Clone)]
pub struct GoogleAuthService {
    client_id: String,
    client_secret: String,
    callback_url: String,
    http: reqwest::Client,
}

/// Profile fields we keep from the OpenID userinfo response.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Stable Google subject identifier
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl GoogleAuthService {
    /// Build the client if all three OAuth settings are present.
    pub fn from_config(config: &Config) -> Option<Self> {
        Some(Self {
            client_id: config.google_client_id.clone()?,
            client_secret: config.google_client_secret.clone()?,
            callback_url: config.google_callback_url.clone()?,
            http: reqwest::Client::new(),
        })
    }

    /// Authorization URL to redirect the browser to.
    pub fn authorize_url(&self, oauth_state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&\
             scope=openid%20email%20profile&prompt=select_account&state={}",
            AUTHORIZE_ENDPOINT,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.callback_url),
            oauth_state
        )
    }

    /// Exchange an authorization code and fetch the caller's profile.
    pub async fn exchange_code(&self, code: &str) -> anyhow::Result<GoogleProfile> {
        let token: TokenResponse = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.callback_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .context("Token endpoint unreachable")?
            .error_for_status()
            .context("Token exchange rejected")?
            .json()
            .await
            .context("Malformed token response")?;

        let profile: GoogleProfile = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .context("Userinfo endpoint unreachable")?
            .error_for_status()
            .context("Userinfo rejected")?
            .json()
            .await
            .context("Malformed userinfo response")?;

        Ok(profile)
    }
}
