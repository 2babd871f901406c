mod transaction_storage;

use std::sync::Arc;

use crate::models::{LedgerError, Transaction};

pub use transaction_storage::TransactionStorage;

/// Point-in-time view of stored transactions. Later writes never change it.
pub type Snapshot = Vec<Arc<Transaction>>;

pub trait Storage: Send + Sync + 'static {
    /// Validates and appends a whole batch, or appends nothing.
    fn save_all(&self, transactions: Vec<Transaction>) -> Result<usize, LedgerError>;
    fn get_all(&self) -> Snapshot;
    fn get_all_by_owner(&self, owner_id: &str) -> Snapshot;
    fn len(&self) -> usize;
    fn clear(&self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
