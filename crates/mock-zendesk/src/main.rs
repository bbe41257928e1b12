//! Local stand-in for a Zendesk account.
//!
//! Serves just enough of the OAuth and ticket API for the connector, the
//! redirect service and the CLI host to be exercised end to end:
//!
//! * `GET  /oauth/authorizations/new` auto-approves and redirects back
//!   with a fresh code.
//! * `POST /oauth/tokens` trades any non-empty code for a `mock_…` token.
//! * `GET  /api/v2/tickets.json` lists a fixed set of tickets to bearers
//!   of a `mock_…` token.

use std::sync::OnceLock;

use axum::extract::{Json, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;
use zendesk_wdc_sdk::endpoints::{AUTHORIZE_PATH, TICKETS_PATH, TOKEN_PATH};

/// Prefix of every token this mock issues.
const TOKEN_PREFIX: &str = "mock_";
const DEFAULT_PORT: u16 = 4100;

static TICKETS: OnceLock<Vec<MockTicket>> = OnceLock::new();

#[derive(Serialize, Clone)]
struct MockTicket {
    url: String,
    id: u64,
    status: String,
    recipient: Option<String>,
    subject: String,
    created_at: DateTime<Utc>,
}

fn seed_tickets(public_url: &str, now: DateTime<Utc>) -> Vec<MockTicket> {
    let fixtures = [
        (1, "open", Some("support@yaska.zendesk.com"), "Cannot log in"),
        (2, "pending", None, "Invoice copy"),
        (3, "solved", Some("billing@yaska.zendesk.com"), "Refund request"),
        (4, "new", Some("support@yaska.zendesk.com"), "Feature request"),
    ];
    fixtures
        .into_iter()
        .map(|(id, status, recipient, subject)| MockTicket {
            url: format!("{public_url}api/v2/tickets/{id}.json"),
            id,
            status: status.to_string(),
            recipient: recipient.map(String::from),
            subject: subject.to_string(),
            created_at: now - Duration::days(i64::try_from(id).unwrap_or(0)),
        })
        .collect()
}

fn public_url(port: u16) -> String {
    format!("http://localhost:{port}/")
}

fn app() -> Router {
    Router::new()
        .route(&format!("/{AUTHORIZE_PATH}"), get(authorize))
        .route(&format!("/{TOKEN_PATH}"), post(token))
        .route(&format!("/{TICKETS_PATH}"), get(tickets))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("MOCK_ZENDESK_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let base_url = public_url(port);

    TICKETS.get_or_init(|| seed_tickets(&base_url, Utc::now()));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(url = %base_url, "mock Zendesk listening");
    axum::serve(listener, app()).await?;
    Ok(())
}

// --- Endpoints ---

#[derive(Deserialize)]
struct AuthorizeParams {
    response_type: Option<String>,
    redirect_uri: String,
    client_id: Option<String>,
    scope: Option<String>,
}

async fn authorize(Query(params): Query<AuthorizeParams>) -> Response {
    info!(
        client_id = ?params.client_id,
        scope = ?params.scope,
        "authorize request"
    );

    if params.response_type.as_deref() != Some("code") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "unsupported_response_type" })),
        )
            .into_response();
    }

    // Auto-approve: no login page.
    let code = Uuid::new_v4().simple().to_string();
    let separator = if params.redirect_uri.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{}{separator}code={code}", params.redirect_uri)).into_response()
}

#[derive(Deserialize)]
struct TokenRequest {
    #[serde(default)]
    code: String,
    #[serde(default)]
    scope: Option<String>,
}

async fn token(Json(req): Json<TokenRequest>) -> Response {
    if req.code.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        )
            .into_response();
    }

    info!("token issued");
    Json(json!({
        "access_token": format!("{TOKEN_PREFIX}{}", Uuid::new_v4().simple()),
        "token_type": "bearer",
        "scope": req.scope.unwrap_or_else(|| "read".to_string()),
    }))
    .into_response()
}

async fn tickets(headers: HeaderMap) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|t| t.starts_with(TOKEN_PREFIX));

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Couldn't authenticate you" })),
        )
            .into_response();
    }

    let tickets = TICKETS.get_or_init(|| seed_tickets(&public_url(DEFAULT_PORT), Utc::now()));
    let body: Value = json!({
        "tickets": tickets,
        "next_page": null,
        "previous_page": null,
        "count": tickets.len(),
    });
    Json(body).into_response()
}
