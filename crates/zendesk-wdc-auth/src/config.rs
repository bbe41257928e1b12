//! Redirect-completion service configuration.
//!
//! Built from environment variables at startup and injected into Axum
//! handlers via [`axum::extract::State`]. Unlike the connector's own
//! configuration this one carries the OAuth client secret.

/// Global configuration shared across all handlers.
#[derive(Clone)]
pub struct AuthConfig {
    /// Port to listen on (default `3333`).
    pub listen_port: u16,
    /// Zendesk account base URL, always ending in `/`.
    pub zendesk_base_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret. Never leaves this service.
    pub client_secret: String,
    /// Redirect URI registered with Zendesk; must match the one the
    /// connector sent in the authorization request.
    pub redirect_uri: String,
    /// Where the browser goes once the cookie is set.
    pub connector_page_url: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("listen_port", &self.listen_port)
            .field("zendesk_base_url", &self.zendesk_base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("connector_page_url", &self.connector_page_url)
            .finish()
    }
}

impl AuthConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                | Default                          | Description              |
    /// |-------------------------|----------------------------------|--------------------------|
    /// | `AUTH_PORT`             | `3333`                           | HTTP listen port         |
    /// | `ZENDESK_BASE_URL`      | `https://yaska.zendesk.com/`     | Zendesk account          |
    /// | `ZENDESK_CLIENT_ID`     | `tableau`                        | OAuth client id          |
    /// | `ZENDESK_CLIENT_SECRET` | empty                            | OAuth client secret      |
    /// | `ZENDESK_REDIRECT_URI`  | `http://localhost:3333/redirect` | Registered redirect URI  |
    /// | `CONNECTOR_PAGE_URL`    | `/`                              | Post-login landing page  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_port: u16 = lookup("AUTH_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(3333);

        let mut zendesk_base_url =
            lookup("ZENDESK_BASE_URL").unwrap_or_else(|| "https://yaska.zendesk.com/".to_string());
        if !zendesk_base_url.ends_with('/') {
            zendesk_base_url.push('/');
        }

        Self {
            listen_port,
            zendesk_base_url,
            client_id: lookup("ZENDESK_CLIENT_ID").unwrap_or_else(|| "tableau".to_string()),
            client_secret: lookup("ZENDESK_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: lookup("ZENDESK_REDIRECT_URI")
                .unwrap_or_else(|| "http://localhost:3333/redirect".to_string()),
            connector_page_url: lookup("CONNECTOR_PAGE_URL").unwrap_or_else(|| "/".to_string()),
        }
    }
}
