//! The host-facing connector.
//!
//! A host drives [`Connector`] through three calls, once per phase:
//!
//! ```text
//! init(phase, cookies, &mut secret)   every phase
//! get_schema()                        gather-data phase
//! get_data(table_id, secret)          gather-data phase, once per table
//! ```
//!
//! Failures come back as [`ConnectorError`]; the host turns them into its
//! own abort call with [`ConnectorError::host_abort`].

use tracing::info;
use zendesk_wdc_models::{AuthPurpose, AuthType, Credential, Phase, TableSchema, TicketRow};

use crate::config::ConnectorConfig;
use crate::error::ConnectorError;
use crate::fetcher::TicketFetcher;
use crate::session::{AuthRedirect, CookieJar, InitOutcome, SessionManager};

/// Name the host shows for connections made through this connector.
pub const CONNECTION_NAME: &str = "Zendesk";

/// The Zendesk ticket connector.
#[derive(Debug, Clone)]
pub struct Connector {
    session: SessionManager,
    fetcher: TicketFetcher,
}

impl Connector {
    /// Build a connector from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Config`] if the HTTP client cannot be built.
    pub fn new(config: ConnectorConfig) -> Result<Self, ConnectorError> {
        let fetcher = TicketFetcher::new(&config)?;
        Ok(Self {
            session: SessionManager::new(config),
            fetcher,
        })
    }

    /// Connection name reported on submit.
    pub fn connection_name(&self) -> &'static str {
        CONNECTION_NAME
    }

    /// The connector manages its own OAuth credential.
    pub fn auth_type(&self) -> AuthType {
        AuthType::Custom
    }

    /// Session manager, for hosts that render their own connect UI.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// `init` hook.
    pub fn init(
        &self,
        phase: Phase,
        cookies: &impl CookieJar,
        secret_slot: &mut Option<Credential>,
    ) -> InitOutcome {
        self.session.on_lifecycle_init(phase, cookies, secret_slot)
    }

    /// Start the OAuth handshake (the "connect" action).
    pub fn connect(&self, purpose: AuthPurpose) -> AuthRedirect {
        self.session.begin_auth_redirect(purpose)
    }

    /// `getSchema` hook.
    pub fn get_schema(&self) -> Vec<TableSchema> {
        TableSchema::all()
    }

    /// `getData` hook: fetch every row of `table_id` in one batch.
    ///
    /// # Errors
    ///
    /// * [`ConnectorError::UnknownTable`] for a table not in [`Self::get_schema`].
    /// * [`ConnectorError::NoCredential`] if the secret slot is empty.
    /// * Any error of [`TicketFetcher::fetch_tickets`].
    pub async fn get_data(
        &self,
        table_id: &str,
        secret_slot: Option<&Credential>,
    ) -> Result<Vec<TicketRow>, ConnectorError> {
        let table = TableSchema::find(table_id)?;
        let credential = secret_slot.ok_or(ConnectorError::NoCredential)?;

        info!(table = %table.id, url = %self.fetcher.tickets_url(), "gathering data");
        self.fetcher.fetch_tickets(credential).await
    }
}
