//! Ticket fetching and row projection.
//!
//! [`TicketFetcher::fetch_tickets`] performs exactly one authenticated
//! request. Turning the body into rows is done by [`project_tickets`],
//! which is pure and tested on its own.

use serde::Deserialize;
use tracing::{debug, info, warn};
use zendesk_wdc_models::{Credential, TicketRow};

use crate::config::ConnectorConfig;
use crate::endpoints::ZendeskEndpoints;
use crate::error::ConnectorError;

// ---------------------------------------------------------------------------
// Response schema
// ---------------------------------------------------------------------------

/// Body of `GET tickets.json`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct TicketsPage {
    tickets: Vec<ZendeskTicket>,
    #[serde(default)]
    next_page: Option<String>,
    #[serde(default)]
    count: Option<u64>,
}

/// The subset of a Zendesk ticket the connector projects.
#[derive(Debug, Deserialize)]
struct ZendeskTicket {
    url: String,
    id: u64,
    status: String,
    #[serde(default)]
    recipient: Option<String>,
}

impl From<ZendeskTicket> for TicketRow {
    fn from(t: ZendeskTicket) -> Self {
        Self {
            url: t.url,
            id: t.id,
            status: t.status,
            recipient: t.recipient,
        }
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project a raw `tickets.json` body into rows.
///
/// * empty body, `null`, or no `tickets` field → [`ConnectorError::FetchEmpty`]
/// * a `tickets` field of the wrong shape → [`ConnectorError::MalformedResponse`]
/// * `{"tickets": []}` → zero rows
///
/// Pagination cursors are ignored: only the rows of this body are returned.
pub fn project_tickets(body: &[u8]) -> Result<Vec<TicketRow>, ConnectorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ConnectorError::FetchEmpty);
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ConnectorError::MalformedResponse(format!("invalid JSON: {e}")))?;

    match &value {
        serde_json::Value::Null => return Err(ConnectorError::FetchEmpty),
        serde_json::Value::Object(map) => {
            if map.get("tickets").is_none_or(serde_json::Value::is_null) {
                return Err(ConnectorError::FetchEmpty);
            }
        }
        other => {
            return Err(ConnectorError::MalformedResponse(format!(
                "expected an object, got {}",
                json_kind(other)
            )));
        }
    }

    let page: TicketsPage = serde_json::from_value(value)
        .map_err(|e| ConnectorError::MalformedResponse(e.to_string()))?;

    if let Some(next_page) = &page.next_page {
        debug!(next_page = %next_page, count = ?page.count, "ignoring pagination cursor");
    }

    Ok(page.tickets.into_iter().map(TicketRow::from).collect())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// TicketFetcher
// ---------------------------------------------------------------------------

/// Issues the ticket-listing request.
///
/// One attempt per call: no retry, no backoff, no configured timeout.
#[derive(Debug, Clone)]
pub struct TicketFetcher {
    client: reqwest::Client,
    tickets_url: String,
}

impl TicketFetcher {
    /// Create a fetcher for the account described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ConnectorConfig) -> Result<Self, ConnectorError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("zendesk-wdc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConnectorError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            tickets_url: ZendeskEndpoints::tickets(&config.auth_base_url),
        })
    }

    /// URL this fetcher requests.
    pub fn tickets_url(&self) -> &str {
        &self.tickets_url
    }

    /// Fetch and project the ticket list.
    ///
    /// Any transport error or non-2xx status becomes
    /// [`ConnectorError::FetchFailed`]; no partial rows are ever returned.
    pub async fn fetch_tickets(&self, credential: &Credential) -> Result<Vec<TicketRow>, ConnectorError> {
        let response = self
            .client
            .get(&self.tickets_url)
            .bearer_auth(credential.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.tickets_url, error = %e, "ticket request failed");
                ConnectorError::FetchFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.tickets_url, %status, "ticket request rejected");
            return Err(ConnectorError::FetchFailed(format!("upstream returned {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConnectorError::FetchFailed(e.to_string()))?;

        let rows = project_tickets(&body)?;
        info!(rows = rows.len(), "tickets fetched");
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
