use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::models::{LedgerError, Transaction};
use crate::storage::{Snapshot, Storage};
use crate::validation::validate_fields;

/// In-memory, append-only ledger shared by every request.
///
/// A single reader/writer lock guards the backing vector: reads run side by side,
/// a batch append or a clear is exclusive and is never observed half done.
#[derive(Debug, Default)]
pub struct TransactionStorage {
    transactions: RwLock<Vec<Arc<Transaction>>>
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(Vec::new())
        }
    }

    //NOTE: Writers only touch the vector after the whole batch validated, so a poisoned lock still guards consistent data
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<Transaction>>> {
        self.transactions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<Transaction>>> {
        self.transactions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for TransactionStorage {
    /// Appends the batch in order once every record passed the validator.
    ///
    /// Validation runs again here regardless of what the caller already checked,
    /// so nothing structurally invalid ever reaches the ledger.
    ///
    /// # Errors
    /// Returns the first failing record's 0-based index and rule. Nothing is
    /// appended in that case.
    fn save_all(&self, transactions: Vec<Transaction>) -> Result<usize, LedgerError> {
        for (index, transaction) in transactions.iter().enumerate() {
            validate_fields(&transaction.to_fields())
                .map_err(|source| LedgerError::invalid_field(index, source))?;
        }

        let count = transactions.len();
        let mut stored = self.write();

        stored.extend(transactions.into_iter().map(Arc::new));

        debug!("Committed batch of {count} transactions, ledger holds {}", stored.len());

        Ok(count)
    }

    fn get_all(&self) -> Snapshot {
        self.read().clone()
    }

    fn get_all_by_owner(&self, owner_id: &str) -> Snapshot {
        self.read()
            .iter()
            .filter(|transaction| transaction.belongs_to(owner_id))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn clear(&self) {
        let mut stored = self.write();
        let removed = stored.len();

        stored.clear();

        debug!("Cleared {removed} transactions from the ledger");
    }
}
