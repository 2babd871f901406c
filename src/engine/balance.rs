use crate::models::{BalanceSummary, Transaction, TransactionStatus, TransactionType};

/// Sums settled credits and debits. Failed and pending lines never count.
pub fn summarize_balance<'a, I>(transactions: I) -> BalanceSummary
where
    I: IntoIterator<Item = &'a Transaction>
{
    let mut summary = BalanceSummary::default();

    for transaction in transactions {
        if transaction.status != TransactionStatus::Success {
            continue;
        }

        match transaction.transaction_type {
            TransactionType::Credit => summary.credits = summary.credits.saturating_add(transaction.amount),
            TransactionType::Debit => summary.debits = summary.debits.saturating_add(transaction.amount)
        }
    }

    summary.balance = summary.credits.saturating_sub(summary.debits);
    summary
}
