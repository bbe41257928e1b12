//! SDK error types.
//!
//! [`ConnectorError`] is the single error type returned by every fallible
//! operation in the SDK. Each variant maps onto one of the two abort calls
//! a host offers, see [`ConnectorError::host_abort`].

use zendesk_wdc_models::ModelError;

/// Message shown to the user when the ticket list comes back empty.
pub const NO_RESULTS_MESSAGE: &str = "No results found";
/// Message attached to every re-authentication request.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Access Token";

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// No credential in the cookie jar or the host secret slot.
    #[error("no credential available")]
    NoCredential,

    /// Zendesk answered without a ticket list.
    #[error("no results found")]
    FetchEmpty,

    /// The request failed: transport error or non-2xx status.
    ///
    /// Expired tokens, network errors and server errors are not told apart.
    #[error("ticket fetch failed: {0}")]
    FetchFailed(String),

    /// The response carried a ticket list that does not match the
    /// expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The host asked for a table this connector does not declare.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// Invalid configuration or HTTP client construction failure.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ModelError> for ConnectorError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::EmptyCredential => ConnectorError::NoCredential,
            ModelError::UnknownTable { id } => ConnectorError::UnknownTable(id),
        }
    }
}

/// The abort call a host should make for a failed data pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAbort {
    /// Halt the pass and show a message (`abortWithError`).
    WithError(String),
    /// Halt the pass and send the user through auth again (`abortForAuth`).
    ForAuth(String),
}

impl HostAbort {
    /// The message carried by the abort.
    pub fn message(&self) -> &str {
        match self {
            Self::WithError(m) | Self::ForAuth(m) => m,
        }
    }
}

impl ConnectorError {
    /// Map this error onto the host's abort mechanism.
    ///
    /// Fetch failures always force re-authentication, even when the cause
    /// was transient.
    pub fn host_abort(&self) -> HostAbort {
        match self {
            Self::FetchEmpty => HostAbort::WithError(NO_RESULTS_MESSAGE.to_string()),
            Self::MalformedResponse(_) | Self::UnknownTable(_) | Self::Config(_) => {
                HostAbort::WithError(self.to_string())
            }
            Self::FetchFailed(_) | Self::NoCredential => {
                HostAbort::ForAuth(INVALID_TOKEN_MESSAGE.to_string())
            }
        }
    }
}
