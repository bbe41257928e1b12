//! Static table declaration handed to the host in `getSchema`.
//!
//! The connector exposes exactly one table whose columns mirror the
//! fields of [`TicketRow`](crate::TicketRow). The declaration never varies
//! at runtime.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Id of the single table this connector declares.
pub const TICKETS_TABLE_ID: &str = "ZendeskTable";

/// Column data types understood by the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 text.
    String,
    /// Floating point number. The host has no unsigned integer column type.
    Float,
    /// Signed integer.
    Int,
    /// Boolean.
    Bool,
}

/// One column of a table declaration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Column id; also the key of the matching field in each row.
    pub id: String,
    /// Host data type.
    #[serde(rename = "dataType")]
    pub data_type: ColumnType,
}

impl ColumnSchema {
    /// Declare a column.
    pub fn new(id: &str, data_type: ColumnType) -> Self {
        Self {
            id: id.to_string(),
            data_type,
        }
    }
}

/// A table declaration: id, display alias and ordered columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table id the host passes back in `getData`.
    pub id: String,
    /// Human-readable name shown by the host.
    pub alias: String,
    /// Ordered column list.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// The ticket table: `url`, `id`, `status`, `recipient`.
    pub fn tickets() -> Self {
        Self {
            id: TICKETS_TABLE_ID.to_string(),
            alias: "Zendesk tickets".to_string(),
            columns: vec![
                ColumnSchema::new("url", ColumnType::String),
                ColumnSchema::new("id", ColumnType::Float),
                ColumnSchema::new("status", ColumnType::String),
                ColumnSchema::new("recipient", ColumnType::String),
            ],
        }
    }

    /// Every table this connector declares.
    pub fn all() -> Vec<Self> {
        vec![Self::tickets()]
    }

    /// Look up a declared table by id.
    pub fn find(id: &str) -> Result<Self, ModelError> {
        Self::all()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ModelError::UnknownTable { id: id.to_string() })
    }

    /// Column ids in declaration order.
    pub fn column_ids(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }
}
