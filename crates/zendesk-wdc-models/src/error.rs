//! Error types for the `zendesk-wdc-models` crate.
//!
//! All fallible constructors in this crate return variants of
//! [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A credential was built from an empty string.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// A table id did not match any declared table.
    #[error("unknown table \"{id}\"")]
    UnknownTable {
        /// The table id that was requested.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_credential() {
        assert_eq!(
            ModelError::EmptyCredential.to_string(),
            "credential must not be empty"
        );
    }

    #[test]
    fn error_display_unknown_table() {
        let err = ModelError::UnknownTable {
            id: "Orders".into(),
        };
        assert_eq!(err.to_string(), "unknown table \"Orders\"");
    }
}
