//! Bearer credential issued by the Zendesk OAuth provider.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Name of the cookie the redirect-completion handler stores the token in.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// An opaque bearer token.
///
/// A `Credential` is never empty: holding one means the user is considered
/// authenticated. No expiry or validity check is ever performed on it.
///
/// The token is redacted from `Debug` output so it cannot leak through
/// logs.
///
/// # Examples
///
/// ```
/// use zendesk_wdc_models::Credential;
///
/// let cred = Credential::new("abc123").unwrap();
/// assert_eq!(cred.as_str(), "abc123");
/// assert!(Credential::new("").is_err());
/// assert_eq!(format!("{cred:?}"), "Credential(***)");
/// ```
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Credential(String);

impl Credential {
    /// Create a credential, rejecting the empty string.
    pub fn new(token: impl Into<String>) -> Result<Self, ModelError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ModelError::EmptyCredential);
        }
        Ok(Self(token))
    }

    /// Interpret an optional raw value (cookie, secret slot) as a credential.
    ///
    /// `None` and the empty string both mean "no credential".
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| Self::new(s).ok())
    }

    /// Return the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl TryFrom<String> for Credential {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Credential> for String {
    fn from(c: Credential) -> Self {
        c.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_token_is_a_credential() {
        for token in ["a", "abc123", " ", "tok with spaces"] {
            assert!(Credential::new(token).is_ok(), "{token:?}");
        }
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(Credential::new(""), Err(ModelError::EmptyCredential));
    }

    #[test]
    fn parse_optional_handles_missing_and_empty() {
        assert_eq!(Credential::parse_optional(None), None);
        assert_eq!(Credential::parse_optional(Some("")), None);
        assert_eq!(
            Credential::parse_optional(Some("tok")).map(|c| c.as_str().to_string()),
            Some("tok".to_string())
        );
    }

    #[test]
    fn debug_redacts_token() {
        let cred = Credential::new("very-secret").unwrap();
        assert!(!format!("{cred:?}").contains("very-secret"));
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        assert!(serde_json::from_str::<Credential>("\"\"").is_err());
        let cred: Credential = serde_json::from_str("\"tok\"").unwrap();
        assert_eq!(cred.as_str(), "tok");
    }
}
