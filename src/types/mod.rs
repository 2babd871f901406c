mod query;
#[cfg(test)]
mod tests;

pub use query::{Pagination, SortDirection, SortField, Sorting, DEFAULT_PAGE_SIZE};

/// Opaque identifier of the principal that uploaded a statement.
pub type OwnerId = String;
/// Minor currency units, never negative once stored.
pub type Amount = i64;
