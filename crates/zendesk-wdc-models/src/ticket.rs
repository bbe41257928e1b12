//! Ticket rows returned to the host.

use serde::{Deserialize, Serialize};

/// One projected Zendesk ticket.
///
/// Field names match the column ids of
/// [`TableSchema::tickets`](crate::TableSchema::tickets). `recipient` is
/// `None` for tickets that did not arrive by e-mail.
///
/// # Examples
///
/// ```
/// use zendesk_wdc_models::TicketRow;
///
/// let row = TicketRow::new("u1", 1, "open", Some("a@x.com"));
/// let json = serde_json::to_value(&row).unwrap();
/// assert_eq!(json["recipient"], "a@x.com");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    /// API URL of the ticket.
    pub url: String,
    /// Ticket number.
    pub id: u64,
    /// Workflow status (`new`, `open`, `pending`, `solved`, …).
    pub status: String,
    /// Original recipient address.
    pub recipient: Option<String>,
}

impl TicketRow {
    /// Build a row from borrowed values.
    pub fn new(url: &str, id: u64, status: &str, recipient: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            id,
            status: status.to_string(),
            recipient: recipient.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_serialises_exactly_four_keys() {
        let json = serde_json::to_value(TicketRow::new("u1", 1, "open", None)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj["recipient"].is_null());
    }
}
