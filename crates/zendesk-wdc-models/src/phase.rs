//! Host lifecycle phases and auth purposes.
//!
//! Both enums are supplied by the host and parsed from the host's own
//! string values (`"gatherData"`, `"ephemeral"`, …).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The stage of the host lifecycle the connector is being initialised in.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Phase {
    /// The host is (re-)authenticating the user; only auth UI is shown.
    Auth,
    /// The user is interacting with the connector page.
    Interactive,
    /// The host is pulling data in the background.
    GatherData,
}

// ---------------------------------------------------------------------------
// AuthPurpose
// ---------------------------------------------------------------------------

/// Why the host requests authentication.
///
/// Desktop hosts authenticate for a single session; server hosts keep the
/// credential for scheduled refreshes and may use a different OAuth client.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthPurpose {
    /// Single-session authentication (desktop).
    #[default]
    Ephemeral,
    /// Long-lived authentication (server refresh).
    Enduring,
}

/// How the host should treat the connector's credential.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthType {
    /// No authentication.
    None,
    /// Host-managed username/password.
    Basic,
    /// Connector-managed (OAuth) authentication.
    Custom,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
