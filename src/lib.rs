//! Bank statement ledger.
//!
//! Statements arrive as headerless CSV with six columns
//! (`timestamp, name, type, amount, status, description`). Each upload is
//! parsed, validated and committed to an in-memory ledger as one batch, then
//! queried per owner:
//!
//! - [`engine::LedgerEngine::ingest`] commits a statement or rejects it whole.
//! - [`engine::LedgerEngine::calculate_balance`] sums settled credits and debits.
//! - [`engine::LedgerEngine::get_issues`] lists failed and pending lines, sorted and paginated.
//!
//! The ledger ([`storage::TransactionStorage`]) is created by the caller and
//! shared behind an `Arc`; it is safe to ingest and query from many threads.

pub mod cli;
pub mod engine;
pub mod models;
pub mod parser;
pub mod storage;
pub mod types;
pub mod validation;

pub use engine::LedgerEngine;
pub use models::{BalanceSummary, IssuesPage, LedgerError, Transaction, TransactionView, UploadReceipt};
pub use storage::{Storage, TransactionStorage};
pub use types::{Pagination, SortDirection, Sorting};
