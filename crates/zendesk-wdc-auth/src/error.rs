//! Error types for the redirect-completion service.
//!
//! [`AuthError`] unifies all failure modes and implements [`axum::response::IntoResponse`]
//! so handlers can return `Result<…, AuthError>` directly.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors that can occur while completing the OAuth redirect.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Zendesk redirected back without an authorization code.
    #[error("missing authorization code")]
    MissingCode,

    /// The user denied access or Zendesk reported an error on redirect.
    #[error("authorization denied: {0}")]
    Denied(String),

    /// The code exchange failed or the provider returned an error.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// The HTTP call to Zendesk failed at the transport level.
    #[error("failed to reach Zendesk: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON (de)serialisation error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingCode => StatusCode::BAD_REQUEST,
            Self::Denied(_) | Self::TokenExchangeFailed(_) => StatusCode::UNAUTHORIZED,
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();

        tracing::error!(%status, error = %message, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AuthError::MissingCode.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Denied("access_denied".into()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::TokenExchangeFailed("bad code".into())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
