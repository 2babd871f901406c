
use chrono::{DateTime, Utc};

use crate::models::{TransactionStatus, TransactionType, ValidationError};
use crate::types::Amount;

pub const FIELD_COUNT: usize = 6;

const FIELD_NAMES: [&str; FIELD_COUNT] = ["timestamp", "name", "type", "amount", "status", "description"];

const TIMESTAMP: usize = 0;
const TYPE: usize = 2;
const AMOUNT: usize = 3;
const STATUS: usize = 4;

/// Checks the six raw columns of a statement line.
///
/// Rules run in a fixed order and the first broken rule is reported:
/// field count, presence of every field, type, status, timestamp, amount.
pub fn validate_fields<S: AsRef<str>>(fields: &[S]) -> Result<(), ValidationError> {
    if fields.len() != FIELD_COUNT {
        return Err(ValidationError::FieldCount { found: fields.len() });
    }

    for (field, name) in fields.iter().zip(FIELD_NAMES) {
        if field.as_ref().trim().is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    fields[TYPE].as_ref().parse::<TransactionType>()?;
    fields[STATUS].as_ref().parse::<TransactionStatus>()?;
    parse_timestamp(fields[TIMESTAMP].as_ref())?;
    parse_amount(fields[AMOUNT].as_ref())?;

    Ok(())
}

/// Parses positive unix seconds into a UTC instant.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    let invalid = || ValidationError::InvalidTimestamp(value.to_string());

    let seconds: i64 = value.parse().map_err(|_| invalid())?;

    if seconds <= 0 {
        return Err(invalid());
    }

    DateTime::from_timestamp(seconds, 0).ok_or_else(invalid)
}

pub fn parse_amount(value: &str) -> Result<Amount, ValidationError> {
    let value = value.trim();

    match value.parse::<Amount>() {
        Ok(amount) if amount >= 0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount(value.to_string()))
    }
}
