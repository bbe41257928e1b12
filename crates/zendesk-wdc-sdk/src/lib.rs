//! # Zendesk WDC SDK
//!
//! Session handling and data fetching for the Zendesk web data connector.
//!
//! The SDK provides:
//!
//! * [`SessionManager`] — resolves the bearer credential (cookie or host
//!   secret slot) and builds the OAuth authorization redirect.
//! * [`TicketFetcher`] — one authenticated `GET tickets.json`, projected
//!   into [`TicketRow`](zendesk_wdc_models::TicketRow)s.
//! * [`Connector`] — the `init` / `get_schema` / `get_data` boundary a host
//!   drives.
//! * [`ZendeskEndpoints`] — canonical URL definitions.
//! * [`ConnectorError`] — unified error type, mapped to host aborts with
//!   [`ConnectorError::host_abort`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use zendesk_wdc_models::{Phase, TICKETS_TABLE_ID};
//! use zendesk_wdc_sdk::{Connector, ConnectorConfig};
//!
//! # async fn run() -> Result<(), zendesk_wdc_sdk::ConnectorError> {
//! let connector = Connector::new(ConnectorConfig::default())?;
//! let cookies: HashMap<String, String> =
//!     [("accessToken".to_string(), "tok".to_string())].into();
//!
//! let mut secret = None;
//! connector.init(Phase::Interactive, &cookies, &mut secret);
//! let rows = connector.get_data(TICKETS_TABLE_ID, secret.as_ref()).await?;
//! println!("{} tickets", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connector;
pub mod endpoints;
pub mod error;
pub mod fetcher;
pub mod session;

#[cfg(test)]
mod test_support;

pub use config::ConnectorConfig;
pub use connector::Connector;
pub use endpoints::ZendeskEndpoints;
pub use error::{ConnectorError, HostAbort};
pub use fetcher::{TicketFetcher, project_tickets};
pub use session::{AuthRedirect, CookieJar, InitOutcome, SessionManager, UiState};
