// SPDX-License-Identifier: MIT

//! Application error types with the uniform `{ok:false, error:{...}}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No activation code supplied")]
    MissingCode,

    #[error("Invalid activation code")]
    InvalidToken,

    #[error("Device not activated")]
    NotActivated,

    #[error("No sessions remaining")]
    NoSessions,

    #[error("Unknown session")]
    InvalidSession,

    #[error("OAuth failure")]
    OauthFailure,

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable error code surfaced in the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingCode => "missing_code",
            AppError::InvalidToken => "invalid_token",
            AppError::NotActivated => "not_activated",
            AppError::NoSessions => "no_sessions",
            AppError::InvalidSession => "invalid_session",
            AppError::OauthFailure => "oauth_failure",
            AppError::NotImplemented(_) => "not_implemented",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorEnvelope {
    ok: bool,
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingCode | AppError::InvalidToken | AppError::InvalidSession => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotActivated | AppError::OauthFailure => StatusCode::UNAUTHORIZED,
            AppError::NoSessions => StatusCode::FORBIDDEN,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal details are logged above, never sent to the caller
        let message = match &self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = ErrorEnvelope {
            ok: false,
            error: ErrorBody {
                code: self.code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingCode.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotActivated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NoSessions.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotImplemented("oauth").into_response().status(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidToken.code(), "invalid_token");
        assert_eq!(AppError::InvalidSession.code(), "invalid_session");
        assert_eq!(AppError::OauthFailure.code(), "oauth_failure");
    }
}
