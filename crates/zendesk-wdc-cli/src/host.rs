//! A command-line host for the connector.
//!
//! Drives the same phase sequence an analytics host would: the
//! interactive page captures the credential into the secret slot, then a
//! fresh gather-data pass runs `get_schema` and `get_data` for every
//! declared table.

use serde::Serialize;
use tracing::{info, warn};
use zendesk_wdc_models::{AuthPurpose, Credential, Phase, TicketRow};
use zendesk_wdc_sdk::{Connector, CookieJar, HostAbort};

use crate::persistence::NoCookies;

/// Rows gathered for one table.
#[derive(Debug, Serialize)]
pub struct TableData {
    pub table: String,
    pub rows: Vec<TicketRow>,
}

/// How a host session ended.
#[derive(Debug)]
pub enum SessionEnd {
    /// Every table was gathered.
    Completed(Vec<TableData>),
    /// The user is not connected; they must follow the redirect.
    NotConnected { connect_url: String },
    /// The data pass was halted.
    Aborted {
        abort: HostAbort,
        connect_url: String,
    },
}

/// Holds the host-owned state that survives between phases.
pub struct CliHost {
    connector: Connector,
    purpose: AuthPurpose,
    secret_slot: Option<Credential>,
}

impl CliHost {
    pub fn new(connector: Connector, purpose: AuthPurpose) -> Self {
        Self {
            connector,
            purpose,
            secret_slot: None,
        }
    }

    fn connect_url(&self) -> String {
        self.connector.connect(self.purpose).to_string()
    }

    /// Auth phase: capture the credential without user interaction.
    ///
    /// Returns `true` when the connector asked to auto-submit.
    pub fn authenticate(&mut self, cookies: &impl CookieJar) -> bool {
        let outcome = self.connector.init(Phase::Auth, cookies, &mut self.secret_slot);
        outcome.auto_submit
    }

    /// Interactive phase followed by a gather-data pass.
    pub async fn run(&mut self, cookies: &impl CookieJar) -> SessionEnd {
        let outcome = self
            .connector
            .init(Phase::Interactive, cookies, &mut self.secret_slot);
        if !outcome.ui.signed_in {
            return SessionEnd::NotConnected {
                connect_url: self.connect_url(),
            };
        }

        info!(connection = self.connector.connection_name(), "submitting connector");
        self.gather().await
    }

    /// Gather-data phase: runs on a page without the browser's cookies.
    async fn gather(&mut self) -> SessionEnd {
        self.connector
            .init(Phase::GatherData, &NoCookies, &mut self.secret_slot);

        let mut tables = Vec::new();
        for table in self.connector.get_schema() {
            match self
                .connector
                .get_data(&table.id, self.secret_slot.as_ref())
                .await
            {
                Ok(rows) => tables.push(TableData {
                    table: table.id,
                    rows,
                }),
                Err(e) => {
                    warn!(table = %table.id, error = %e, "data pass aborted");
                    return SessionEnd::Aborted {
                        abort: e.host_abort(),
                        connect_url: self.connect_url(),
                    };
                }
            }
        }
        SessionEnd::Completed(tables)
    }
}
