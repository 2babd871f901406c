use chrono::{DateTime, Utc};

use crate::models::{TransactionStatus, TransactionType};
use crate::types::{Amount, OwnerId};

/// A committed statement line.
///
/// Instances are only built by the statement parser and are never mutated
/// after they enter the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// When the bank booked the line, at second precision.
    pub timestamp: DateTime<Utc>,
    /// Counterparty, trimmed.
    pub name: String,
    pub transaction_type: TransactionType,
    /// Never negative.
    pub amount: Amount,
    pub status: TransactionStatus,
    /// Free text, trimmed.
    pub description: String,
    /// Principal that uploaded the statement. Scopes every read.
    pub owner_id: OwnerId
}

impl Transaction {
    pub fn is_issue(&self) -> bool {
        self.status.is_issue()
    }

    pub fn belongs_to(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    /// Renders the record back into the six CSV columns it was read from.
    pub fn to_fields(&self) -> [String; 6] {
        [
            self.timestamp.timestamp().to_string(),
            self.name.clone(),
            self.transaction_type.as_str().to_string(),
            self.amount.to_string(),
            self.status.as_str().to_string(),
            self.description.clone()
        ]
    }
}
