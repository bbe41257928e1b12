//! Zendesk WDC redirect service — completes the OAuth flow server-side.
//!
//! Zendesk sends the browser to `GET /redirect?code=…` after the user
//! authorises the connector. The service:
//!
//! 1. Exchanges the code for an access token (the client secret never
//!    reaches the browser).
//! 2. Stores the token in the `accessToken` cookie.
//! 3. Sends the browser back to the connector page, where the connector
//!    picks the cookie up during `init`.

mod config;
mod error;
mod oauth;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use serde::Deserialize;
use tracing::info;
use zendesk_wdc_models::ACCESS_TOKEN_COOKIE;

use crate::config::AuthConfig;
use crate::error::AuthError;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
struct AppState {
    config: AuthConfig,
    http: reqwest::Client,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Query string Zendesk appends to the redirect URI.
#[derive(Deserialize)]
struct RedirectParams {
    code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /redirect` — exchange the code and set the cookie.
async fn complete_redirect(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RedirectParams>,
) -> Result<impl IntoResponse, AuthError> {
    if let Some(error) = params.error {
        return Err(AuthError::Denied(params.error_description.unwrap_or(error)));
    }
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or(AuthError::MissingCode)?;

    info!("authorization code received");
    let token = oauth::exchange_code(&state.http, &state.config, &code).await?;
    info!(landing = %state.config.connector_page_url, "access token issued");

    let cookie = format!("{ACCESS_TOKEN_COOKIE}={token}; Path=/");
    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&state.config.connector_page_url),
    ))
}

/// `GET /health` — liveness probe.
async fn health() -> &'static str {
    "ok"
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/redirect", get(complete_redirect))
        .route("/health", get(health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AuthConfig::from_env();
    info!(
        zendesk = %config.zendesk_base_url,
        client_id = %config.client_id,
        redirect_uri = %config.redirect_uri,
        "OAuth client configured"
    );
    if config.client_secret.is_empty() {
        tracing::warn!("ZENDESK_CLIENT_SECRET is not set, token exchange will fail");
    }

    let listen_port = config.listen_port;
    let state = Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    });

    let addr = format!("0.0.0.0:{listen_port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "redirect service listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;
    use crate::oauth::tests::{config_for, serve_token_endpoint};

    fn server(config: AuthConfig) -> TestServer {
        let state = Arc::new(AppState {
            config,
            http: reqwest::Client::new(),
        });
        TestServer::new(app(state)).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let server = server(AuthConfig::from_lookup(|_| None));
        let res = server.get("/health").await;
        res.assert_status_ok();
        res.assert_text("ok");
    }

    #[tokio::test]
    async fn missing_code_is_bad_request() {
        let server = server(AuthConfig::from_lookup(|_| None));
        let res = server.get("/redirect").await;
        res.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn denied_authorization_is_unauthorized() {
        let server = server(AuthConfig::from_lookup(|_| None));
        let res = server
            .get("/redirect")
            .add_query_param("error", "access_denied")
            .await;
        res.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_code_sets_cookie_and_redirects() {
        let base = serve_token_endpoint().await;
        let server = server(config_for(&base));

        let res = server
            .get("/redirect")
            .add_query_param("code", "good-code")
            .await;
        res.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(res.header(header::LOCATION), "/");
        assert_eq!(res.header(header::SET_COOKIE), "accessToken=zd-token; Path=/");
    }

    #[tokio::test]
    async fn rejected_code_is_unauthorized() {
        let base = serve_token_endpoint().await;
        let server = server(config_for(&base));

        let res = server
            .get("/redirect")
            .add_query_param("code", "bad-code")
            .await;
        res.assert_status(StatusCode::UNAUTHORIZED);
    }
}
