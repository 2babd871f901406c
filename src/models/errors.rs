use thiserror::Error;

/// A single rule of the record validator that a statement line broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected 6 fields, found {found}")]
    FieldCount {
        found: usize
    },
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid type [{0}], expected DEBIT or CREDIT")]
    InvalidType(String),
    #[error("invalid status [{0}], expected SUCCESS, FAILED or PENDING")]
    InvalidStatus(String),
    #[error("invalid timestamp [{0}], expected positive unix seconds")]
    InvalidTimestamp(String),
    #[error("invalid amount [{0}], expected a non-negative integer")]
    InvalidAmount(String)
}

/// Errors surfaced by ingestion and queries.
///
/// Record positions are 0-based indexes into the uploaded batch.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Malformed record {index}: expected 6 fields, found {found}")]
    MalformedRecord {
        index: usize,
        found: usize
    },
    #[error("Invalid record {index}: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: ValidationError
    },
    #[error("Statement contains no transactions")]
    EmptyInput,
    #[error("Invalid sort field [{field}], expected one of timestamp, name, amount, type, status")]
    InvalidSortField {
        field: String
    },
    #[error("Unreadable record {index}: {source}")]
    Read {
        index: usize,
        #[source]
        source: csv::Error
    }
}

impl LedgerError {
    pub fn invalid_field(index: usize, source: ValidationError) -> Self {
        match source {
            //NOTE: A wrong field count is structural, report it as such no matter which layer caught it
            ValidationError::FieldCount { found } => Self::MalformedRecord { index, found },
            source => Self::InvalidField { index, source }
        }
    }
}
