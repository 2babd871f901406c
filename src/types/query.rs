use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use crate::models::LedgerError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Requested page of the issue listing.
///
/// Values below 1 are legal input and are clamped when the window is computed:
/// a page below 1 becomes the first page, a limit below 1 becomes [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn effective_page(&self) -> i64 {
        if self.page < 1 { 1 } else { self.page }
    }

    pub fn effective_limit(&self) -> i64 {
        if self.limit < 1 { DEFAULT_PAGE_SIZE } else { self.limit }
    }

    /// Index range of the requested page within a result set of `total` items.
    ///
    /// The range is always inside `0..total`; a page that starts at or past the
    /// end yields an empty range.
    pub fn window(&self, total: usize) -> Range<usize> {
        let page = usize::try_from(self.effective_page()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.effective_limit()).unwrap_or(usize::MAX);

        let start = (page - 1).saturating_mul(limit);

        if start >= total {
            return total..total;
        }

        let end = start.saturating_add(limit).min(total);

        start..end
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending
}

impl From<&str> for SortDirection {
    fn from(value: &str) -> Self {
        //NOTE: Only an explicit DESC flips the order, anything else keeps the ascending default
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(formatter, "ASC"),
            SortDirection::Descending => write!(formatter, "DESC")
        }
    }
}

/// Columns the issue listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Timestamp,
    Name,
    Amount,
    Type,
    Status
}

impl FromStr for SortField {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Ok(SortField::Timestamp);
        }

        match value.to_ascii_lowercase().as_str() {
            "timestamp" => Ok(SortField::Timestamp),
            "name" => Ok(SortField::Name),
            "amount" => Ok(SortField::Amount),
            "type" => Ok(SortField::Type),
            "status" => Ok(SortField::Status),
            _ => Err(LedgerError::InvalidSortField { field: value.to_string() })
        }
    }
}

/// Requested ordering of the issue listing, as received from the caller.
///
/// The field is kept as raw text so that an unsupported column is reported by
/// the query itself rather than silently dropped at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorting {
    pub direction: Option<SortDirection>,
    pub field: String
}

impl Sorting {
    pub fn new(field: impl Into<String>, direction: Option<SortDirection>) -> Self {
        Self {
            direction,
            field: field.into()
        }
    }

    pub fn sort_field(&self) -> Result<SortField, LedgerError> {
        SortField::from_str(&self.field)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }
}
