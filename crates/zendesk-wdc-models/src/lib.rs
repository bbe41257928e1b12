#![deny(missing_docs)]

//! # Zendesk WDC Models
//!
//! Core data types shared by the Zendesk web data connector, its
//! redirect-completion service and the command-line host.
//!
//! ## Lifecycle
//!
//! ```text
//! init(Phase::Auth)         ──► credential captured into the secret slot
//! init(Phase::Interactive)  ──► credential captured, user submits
//! init(Phase::GatherData)   ──► getSchema ──► getData ──► Vec<TicketRow>
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`credential`] | Opaque bearer [`Credential`] |
//! | [`phase`] | Host lifecycle [`Phase`] and [`AuthPurpose`] |
//! | [`schema`] | Static table declaration (`TableSchema`, `ColumnSchema`) |
//! | [`ticket`] | Projected [`TicketRow`] |
//! | [`error`] | [`ModelError`] |

pub mod credential;
pub mod error;
pub mod phase;
pub mod schema;
pub mod ticket;

// Re-export all public types at crate root for convenience.
pub use credential::*;
pub use error::*;
pub use phase::*;
pub use schema::*;
pub use ticket::*;
