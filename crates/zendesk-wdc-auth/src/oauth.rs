//! OAuth authorization-code exchange against Zendesk.

use serde::{Deserialize, Serialize};
use zendesk_wdc_sdk::ZendeskEndpoints;
use zendesk_wdc_sdk::endpoints::READ_SCOPE;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Body of `POST oauth/tokens`.
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    scope: &'static str,
}

/// Successful response of `POST oauth/tokens`.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}

/// Exchange an authorization code for a bearer access token.
pub async fn exchange_code(
    http: &reqwest::Client,
    config: &AuthConfig,
    code: &str,
) -> Result<String, AuthError> {
    let res = http
        .post(ZendeskEndpoints::token(&config.zendesk_base_url))
        .json(&TokenRequest {
            grant_type: "authorization_code",
            code,
            client_id: &config.client_id,
            client_secret: &config.client_secret,
            redirect_uri: &config.redirect_uri,
            scope: READ_SCOPE,
        })
        .send()
        .await?;

    if !res.status().is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(AuthError::TokenExchangeFailed(format!(
            "provider returned error: {text}"
        )));
    }

    let body: TokenResponse = serde_json::from_slice(&res.bytes().await?)?;
    if let Some(token_type) = &body.token_type {
        if !token_type.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::TokenExchangeFailed(format!(
                "unexpected token type: {token_type}"
            )));
        }
    }
    if body.access_token.is_empty() {
        return Err(AuthError::TokenExchangeFailed("empty access_token".into()));
    }

    Ok(body.access_token)
}
