use std::cmp::Ordering;
use std::sync::Arc;

use crate::models::{LedgerError, Transaction};
use crate::types::{Pagination, SortDirection, SortField, Sorting};

/// Filters failed and pending lines, orders them and cuts out one page.
///
/// Returns the page together with the number of issues before pagination.
/// The sort is stable in both directions: lines with equal keys keep the
/// order in which they were committed.
pub fn select_issues(
    transactions: Vec<Arc<Transaction>>,
    pagination: &Pagination,
    sorting: &Sorting
) -> Result<(Vec<Arc<Transaction>>, usize), LedgerError> {
    let field = sorting.sort_field()?;
    let direction = sorting.sort_direction();

    let mut issues: Vec<Arc<Transaction>> = transactions
        .into_iter()
        .filter(|transaction| transaction.is_issue())
        .collect();

    issues.sort_by(|left, right| {
        let ordering = compare(left, right, field);

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse()
        }
    });

    let total = issues.len();
    let window = pagination.window(total);
    let page = issues.drain(window).collect();

    Ok((page, total))
}

fn compare(left: &Transaction, right: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Timestamp => left.timestamp.cmp(&right.timestamp),
        SortField::Name => left.name.cmp(&right.name),
        SortField::Amount => left.amount.cmp(&right.amount),
        SortField::Type => left.transaction_type.cmp(&right.transaction_type),
        SortField::Status => left.status.cmp(&right.status)
    }
}
