//! Canonical Zendesk URL definitions.
//!
//! Every URL the connector, the redirect-completion service and the mock
//! server agree on is built through [`ZendeskEndpoints`].
//!
//! # Layout
//!
//! ```text
//! {base}oauth/authorizations/new   ← browser is redirected here
//! {base}oauth/tokens               ← code exchanged here (server side)
//! {base}api/v2/tickets.json        ← ticket listing
//! ```
//!
//! `{base}` always ends in `/` (see [`ConnectorConfig`](crate::ConnectorConfig)).

/// Path of the authorization page, relative to the account base URL.
pub const AUTHORIZE_PATH: &str = "oauth/authorizations/new";
/// Path of the token endpoint.
pub const TOKEN_PATH: &str = "oauth/tokens";
/// Path of the ticket listing.
pub const TICKETS_PATH: &str = "api/v2/tickets.json";

/// OAuth scope requested by the connector.
pub const READ_SCOPE: &str = "read";

/// Central authority for Zendesk URLs.
///
/// # Examples
///
/// ```
/// use zendesk_wdc_sdk::ZendeskEndpoints;
///
/// let base = "https://acme.zendesk.com/";
/// assert_eq!(
///     ZendeskEndpoints::tickets(base),
///     "https://acme.zendesk.com/api/v2/tickets.json",
/// );
/// assert_eq!(
///     ZendeskEndpoints::authorize(base, "https://app/redirect", "tableau"),
///     "https://acme.zendesk.com/oauth/authorizations/new?response_type=code\
///      &redirect_uri=https://app/redirect&client_id=tableau&scope=read",
/// );
/// ```
pub struct ZendeskEndpoints;

impl ZendeskEndpoints {
    /// Authorization URL the browser is sent to.
    ///
    /// Values are inserted verbatim; no percent-encoding is applied.
    pub fn authorize(base: &str, redirect_uri: &str, client_id: &str) -> String {
        format!(
            "{base}{AUTHORIZE_PATH}?response_type=code&redirect_uri={redirect_uri}\
             &client_id={client_id}&scope={READ_SCOPE}"
        )
    }

    /// Token endpoint used to exchange an authorization code.
    pub fn token(base: &str) -> String {
        format!("{base}{TOKEN_PATH}")
    }

    /// Ticket listing endpoint.
    pub fn tickets(base: &str) -> String {
        format!("{base}{TICKETS_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://yaska.zendesk.com/";

    #[test]
    fn authorize_url_has_four_params_in_order() {
        let url = ZendeskEndpoints::authorize(BASE, "http://localhost:3333/redirect", "tableau");
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(path, "https://yaska.zendesk.com/oauth/authorizations/new");
        let params: Vec<&str> = query.split('&').collect();
        assert_eq!(
            params,
            vec![
                "response_type=code",
                "redirect_uri=http://localhost:3333/redirect",
                "client_id=tableau",
                "scope=read",
            ]
        );
    }

    #[test]
    fn authorize_url_does_not_escape_values() {
        let url = ZendeskEndpoints::authorize(BASE, "a b", "c d");
        assert!(url.contains("redirect_uri=a b&"));
        assert!(url.contains("client_id=c d&"));
    }

    #[test]
    fn token_url() {
        assert_eq!(
            ZendeskEndpoints::token(BASE),
            "https://yaska.zendesk.com/oauth/tokens"
        );
    }

    #[test]
    fn tickets_url() {
        assert_eq!(
            ZendeskEndpoints::tickets(BASE),
            "https://yaska.zendesk.com/api/v2/tickets.json"
        );
    }
}
