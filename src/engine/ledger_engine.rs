use std::io::Read;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::engine::{select_issues, summarize_balance};
use crate::models::{BalanceSummary, IssuesPage, LedgerError, TransactionView, UploadReceipt};
use crate::parser::parse_statement;
use crate::storage::{Storage, TransactionStorage};
use crate::types::{Pagination, Sorting};

/// Statement ingestion and query engine over an injected ledger store.
///
/// Every public operation is one interaction with the store, so each call sees
/// the ledger either before or after any concurrent upload, never in between.
pub struct LedgerEngine<S: Storage = TransactionStorage> {
    storage: Arc<S>
}

impl<S: Storage> LedgerEngine<S> {
    /// Creates a new engine instance with the provided storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Parses a CSV statement and commits it as a single batch for `owner_id`.
    ///
    /// # Errors
    /// Any parse or validation failure rejects the whole statement and leaves
    /// the store untouched.
    pub fn ingest<R: Read>(&self, reader: R, owner_id: &str) -> Result<UploadReceipt, LedgerError> {
        let committed = parse_statement(reader, owner_id)
            .and_then(|transactions| self.storage.save_all(transactions))
            .inspect_err(|error| warn!("Statement for owner [{owner_id}] rejected: {error}"))?;

        debug!("Statement for owner [{owner_id}] committed with {committed} rows");

        Ok(UploadReceipt::success(committed))
    }

    pub fn calculate_balance(&self, owner_id: &str) -> BalanceSummary {
        let transactions = self.storage.get_all_by_owner(owner_id);

        summarize_balance(transactions.iter().map(Arc::as_ref))
    }

    /// Lists failed and pending lines of `owner_id`, sorted and paginated.
    ///
    /// # Errors
    /// Returns `InvalidSortField` if the requested column cannot be sorted on.
    pub fn get_issues(&self, pagination: &Pagination, sorting: &Sorting, owner_id: &str) -> Result<IssuesPage, LedgerError> {
        let transactions = self.storage.get_all_by_owner(owner_id);
        let (page, total) = select_issues(transactions, pagination, sorting)?;

        debug!(
            "Issues for owner [{owner_id}]: page {} of size {} sorted by [{}] {} returned {} of {total}",
            pagination.effective_page(),
            pagination.effective_limit(),
            sorting.field,
            sorting.sort_direction(),
            page.len()
        );

        Ok(IssuesPage {
            transactions: page.iter().map(|transaction| TransactionView::from(transaction.as_ref())).collect(),
            total
        })
    }
}
