//! Connector configuration.
//!
//! [`ConnectorConfig`] is the static record the connector needs to reach
//! Zendesk. It holds no secret material: the OAuth client secret lives in
//! the redirect-completion service only.

/// Static connector configuration.
///
/// Constructed once and passed to [`SessionManager`](crate::SessionManager)
/// and [`TicketFetcher`](crate::TicketFetcher); never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// OAuth client id registered in Zendesk.
    pub client_id: String,
    /// Client id used when the host authenticates for server refreshes.
    /// Falls back to `client_id` when unset.
    pub server_client_id: Option<String>,
    /// Where Zendesk sends the user back with the authorization code.
    pub redirect_uri: String,
    /// Zendesk account base URL, always ending in `/`.
    pub auth_base_url: String,
    /// API version tag sent along with requests.
    pub api_version: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            client_id: "tableau".to_string(),
            server_client_id: None,
            redirect_uri: "http://localhost:3333/redirect".to_string(),
            auth_base_url: "https://yaska.zendesk.com/".to_string(),
            api_version: "20190102".to_string(),
        }
    }
}

impl ConnectorConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                   | Default                          |
    /// |----------------------------|----------------------------------|
    /// | `ZENDESK_CLIENT_ID`        | `tableau`                        |
    /// | `ZENDESK_SERVER_CLIENT_ID` | unset                            |
    /// | `ZENDESK_REDIRECT_URI`     | `http://localhost:3333/redirect` |
    /// | `ZENDESK_BASE_URL`         | `https://yaska.zendesk.com/`     |
    /// | `ZENDESK_API_VERSION`      | `20190102`                       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let auth_base_url = lookup("ZENDESK_BASE_URL").unwrap_or(defaults.auth_base_url);

        Self {
            client_id: lookup("ZENDESK_CLIENT_ID").unwrap_or(defaults.client_id),
            server_client_id: lookup("ZENDESK_SERVER_CLIENT_ID").filter(|s| !s.is_empty()),
            redirect_uri: lookup("ZENDESK_REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            auth_base_url: with_trailing_slash(auth_base_url),
            api_version: lookup("ZENDESK_API_VERSION").unwrap_or(defaults.api_version),
        }
    }

    /// Override the Zendesk base URL, normalising the trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.auth_base_url = with_trailing_slash(base_url.to_string());
        self
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = ConnectorConfig::from_lookup(|_| None);
        assert_eq!(cfg, ConnectorConfig::default());
        assert_eq!(cfg.client_id, "tableau");
        assert_eq!(cfg.api_version, "20190102");
    }

    #[test]
    fn overrides_from_lookup() {
        let cfg = ConnectorConfig::from_lookup(lookup_from(&[
            ("ZENDESK_CLIENT_ID", "desktop"),
            ("ZENDESK_SERVER_CLIENT_ID", "server"),
            ("ZENDESK_BASE_URL", "https://acme.zendesk.com"),
        ]));
        assert_eq!(cfg.client_id, "desktop");
        assert_eq!(cfg.server_client_id.as_deref(), Some("server"));
        assert_eq!(cfg.auth_base_url, "https://acme.zendesk.com/");
    }

    #[test]
    fn empty_server_client_id_is_ignored() {
        let cfg = ConnectorConfig::from_lookup(lookup_from(&[("ZENDESK_SERVER_CLIENT_ID", "")]));
        assert_eq!(cfg.server_client_id, None);
    }

    #[test]
    fn with_base_url_normalises() {
        let cfg = ConnectorConfig::default().with_base_url("http://127.0.0.1:4100");
        assert_eq!(cfg.auth_base_url, "http://127.0.0.1:4100/");
        let cfg = ConnectorConfig::default().with_base_url("http://127.0.0.1:4100/");
        assert_eq!(cfg.auth_base_url, "http://127.0.0.1:4100/");
    }
}
