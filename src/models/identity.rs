//! Opaque, stable caller identity.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

/// Stable key identifying a caller across requests.
///
/// Anonymous identities are minted by the identity middleware for first-time
/// visitors; logged-in callers carry a provider-derived identity instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    /// Wrap an already-established identity string (e.g. from a verified cookie).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint a fresh anonymous identity.
    pub fn anonymous() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(format!("anon:{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Identity derived from an OAuth provider subject, stable across logins.
    pub fn from_subject(provider: &str, subject: &str) -> Self {
        Self(format!("{}:{}", provider, subject))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_identities_are_unique() {
        assert_ne!(CallerIdentity::anonymous(), CallerIdentity::anonymous());
    }

    #[test]
    fn test_subject_identity_is_stable() {
        assert_eq!(
            CallerIdentity::from_subject("google", "1234"),
            CallerIdentity::from_subject("google", "1234")
        );
        assert_eq!(
            CallerIdentity::from_subject("google", "1234").as_str(),
            "google:1234"
        );
    }
}
