use chrono::SecondsFormat;
use serde::Serialize;

use crate::models::{Transaction, TransactionStatus, TransactionType};
use crate::types::Amount;

/// Outcome of a committed statement upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub total_rows: usize,
    pub status: &'static str
}

impl UploadReceipt {
    pub fn success(total_rows: usize) -> Self {
        Self {
            total_rows,
            status: "success"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub credits: Amount,
    pub debits: Amount,
    pub balance: Amount
}

/// Outward projection of a transaction. The owner is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub timestamp: String,
    pub name: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub status: TransactionStatus,
    pub description: String
}

impl From<&Transaction> for TransactionView {
    fn from(transaction: &Transaction) -> Self {
        Self {
            timestamp: transaction.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            name: transaction.name.clone(),
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            status: transaction.status,
            description: transaction.description.clone()
        }
    }
}

/// One page of the issue listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesPage {
    pub transactions: Vec<TransactionView>,
    /// Number of issues across all pages.
    pub total: usize
}
