//! Credential resolution and the OAuth redirect.
//!
//! [`SessionManager`] answers two questions for the host: "is the user
//! connected?" and "where should the browser go to connect?". It never
//! performs network calls. The only transition it knows of
//! (no credential → credential) happens outside the process, when the
//! OAuth provider redirects back and the redirect-completion service sets
//! the `accessToken` cookie.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};
use zendesk_wdc_models::{ACCESS_TOKEN_COOKIE, AuthPurpose, Credential, Phase};

use crate::config::ConnectorConfig;
use crate::endpoints::ZendeskEndpoints;

// ---------------------------------------------------------------------------
// Cookie access
// ---------------------------------------------------------------------------

/// Read-only view of the browser cookie store.
pub trait CookieJar {
    /// Value of the named cookie, if set.
    fn get(&self, name: &str) -> Option<String>;
}

impl CookieJar for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Which parts of the connector page should be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Show the "connected" label instead of the connect button.
    pub signed_in: bool,
    /// Show the button that submits the connector to the host.
    pub show_fetch_action: bool,
}

/// Result of running `init` for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    /// UI to render.
    pub ui: UiState,
    /// The host should submit immediately, without user interaction.
    pub auto_submit: bool,
}

/// Navigation target that starts the OAuth handshake.
///
/// Navigating away discards all in-memory state; the host is expected to
/// do so unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRedirect {
    url: String,
}

impl AuthRedirect {
    /// The authorization URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for AuthRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

// ---------------------------------------------------------------------------
// SessionManager
// ---------------------------------------------------------------------------

/// Resolves the credential and drives the redirect-based handshake.
#[derive(Debug, Clone)]
pub struct SessionManager {
    config: ConnectorConfig,
}

impl SessionManager {
    /// Create a session manager for the given configuration.
    pub fn new(config: ConnectorConfig) -> Self {
        Self { config }
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Credential stored in the `accessToken` cookie, if non-empty.
    pub fn cookie_credential(&self, cookies: &impl CookieJar) -> Option<Credential> {
        Credential::parse_optional(cookies.get(ACCESS_TOKEN_COOKIE).as_deref())
    }

    /// `true` iff a non-empty credential is in the cookie jar or the host
    /// secret slot.
    pub fn has_credential(&self, cookies: &impl CookieJar, secret_slot: Option<&Credential>) -> bool {
        self.cookie_credential(cookies).is_some() || secret_slot.is_some()
    }

    /// Build the authorization URL the browser must be sent to.
    ///
    /// Enduring (server) authentication uses `server_client_id` when one is
    /// configured.
    pub fn begin_auth_redirect(&self, purpose: AuthPurpose) -> AuthRedirect {
        let client_id = match purpose {
            AuthPurpose::Ephemeral => &self.config.client_id,
            AuthPurpose::Enduring => self
                .config
                .server_client_id
                .as_ref()
                .unwrap_or(&self.config.client_id),
        };

        let url = ZendeskEndpoints::authorize(
            &self.config.auth_base_url,
            &self.config.redirect_uri,
            client_id,
        );
        info!(purpose = %purpose, client_id = %client_id, "redirecting to OAuth provider");
        AuthRedirect { url }
    }

    /// Run the connector's part of `init` for the given phase.
    ///
    /// In the auth and interactive phases a cookie credential is copied into
    /// the secret slot so it survives into the data-gathering phase; a
    /// credential that only exists in the slot is left untouched. The
    /// gather-data phase performs no token validation and never writes the
    /// slot.
    pub fn on_lifecycle_init(
        &self,
        phase: Phase,
        cookies: &impl CookieJar,
        secret_slot: &mut Option<Credential>,
    ) -> InitOutcome {
        let cookie = self.cookie_credential(cookies);
        let signed_in = cookie.is_some() || secret_slot.is_some();

        let auto_submit = match phase {
            Phase::Auth | Phase::Interactive => {
                if let Some(credential) = cookie {
                    *secret_slot = Some(credential);
                }
                phase == Phase::Auth && signed_in
            }
            Phase::GatherData => {
                debug!("gather-data phase, skipping token validation");
                false
            }
        };

        info!(phase = %phase, signed_in, auto_submit, "connector initialised");

        InitOutcome {
            ui: UiState {
                signed_in,
                show_fetch_action: phase != Phase::Auth,
            },
            auto_submit,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new(ConnectorConfig::default())
    }

    fn jar(token: Option<&str>) -> HashMap<String, String> {
        token
            .map(|t| HashMap::from([(ACCESS_TOKEN_COOKIE.to_string(), t.to_string())]))
            .unwrap_or_default()
    }

    fn cred(token: &str) -> Credential {
        Credential::new(token).unwrap()
    }

    // -- has_credential -----------------------------------------------------

    #[test]
    fn has_credential_from_cookie() {
        assert!(manager().has_credential(&jar(Some("tok")), None));
    }

    #[test]
    fn has_credential_from_secret_slot() {
        assert!(manager().has_credential(&jar(None), Some(&cred("tok"))));
    }

    #[test]
    fn empty_cookie_is_no_credential() {
        assert!(!manager().has_credential(&jar(Some("")), None));
        assert!(!manager().has_credential(&jar(None), None));
    }

    // -- begin_auth_redirect ------------------------------------------------

    #[test]
    fn redirect_url_for_default_config() {
        let redirect = manager().begin_auth_redirect(AuthPurpose::Ephemeral);
        assert_eq!(
            redirect.as_str(),
            "https://yaska.zendesk.com/oauth/authorizations/new?response_type=code\
             &redirect_uri=http://localhost:3333/redirect&client_id=tableau&scope=read"
        );
    }

    #[test]
    fn enduring_redirect_uses_server_client_id() {
        let config = ConnectorConfig {
            server_client_id: Some("tableau-server".into()),
            ..ConnectorConfig::default()
        };
        let url = SessionManager::new(config).begin_auth_redirect(AuthPurpose::Enduring);
        assert!(url.as_str().contains("&client_id=tableau-server&"));
    }

    #[test]
    fn enduring_redirect_falls_back_to_client_id() {
        let url = manager().begin_auth_redirect(AuthPurpose::Enduring);
        assert!(url.to_string().contains("&client_id=tableau&"));
    }

    // -- on_lifecycle_init --------------------------------------------------

    #[test]
    fn auth_phase_without_credential_shows_connect_only() {
        let mut slot = None;
        let outcome = manager().on_lifecycle_init(Phase::Auth, &jar(None), &mut slot);
        assert_eq!(
            outcome,
            InitOutcome {
                ui: UiState {
                    signed_in: false,
                    show_fetch_action: false,
                },
                auto_submit: false,
            }
        );
        assert!(slot.is_none());
    }

    #[test]
    fn auth_phase_with_cookie_stores_and_auto_submits() {
        let mut slot = None;
        let outcome = manager().on_lifecycle_init(Phase::Auth, &jar(Some("tok")), &mut slot);
        assert!(outcome.auto_submit);
        assert!(outcome.ui.signed_in);
        assert_eq!(slot, Some(cred("tok")));
    }

    #[test]
    fn auth_phase_with_slot_only_auto_submits_and_keeps_slot() {
        let mut slot = Some(cred("stored"));
        let outcome = manager().on_lifecycle_init(Phase::Auth, &jar(None), &mut slot);
        assert!(outcome.auto_submit);
        assert_eq!(slot, Some(cred("stored")));
    }

    #[test]
    fn interactive_phase_stores_cookie_without_submitting() {
        let mut slot = Some(cred("old"));
        let outcome = manager().on_lifecycle_init(Phase::Interactive, &jar(Some("new")), &mut slot);
        assert!(!outcome.auto_submit);
        assert!(outcome.ui.show_fetch_action);
        assert_eq!(slot, Some(cred("new")));
    }

    #[test]
    fn interactive_phase_without_credential_is_not_connected() {
        let mut slot = None;
        let outcome = manager().on_lifecycle_init(Phase::Interactive, &jar(None), &mut slot);
        assert!(!outcome.ui.signed_in);
        assert!(slot.is_none());
    }

    #[test]
    fn gather_data_phase_never_writes_slot() {
        let mut slot = Some(cred("stored"));
        let outcome = manager().on_lifecycle_init(Phase::GatherData, &jar(Some("cookie")), &mut slot);
        assert!(!outcome.auto_submit);
        assert!(outcome.ui.signed_in);
        assert_eq!(slot, Some(cred("stored")));
    }
}
