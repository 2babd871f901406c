use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::models::{LedgerError, Transaction, TransactionStatus, TransactionType, ValidationError};
use crate::validation::{parse_amount, parse_timestamp, validate_fields, FIELD_COUNT};

/// Reads a headerless six-column bank statement into candidate transactions.
///
/// The whole stream is consumed before anything is returned, so a statement is
/// either parsed in full or rejected in full. Every line goes through the record
/// validator before it is coerced; a non-numeric amount or timestamp is an error,
/// never a silent zero.
///
/// # Errors
/// - `MalformedRecord` if a line does not have exactly six fields.
/// - `InvalidField` if a line breaks a validation rule.
/// - `Read` if the underlying reader fails or the CSV is not decodable.
/// - `EmptyInput` if the statement holds no lines beyond blank ones.
pub fn parse_statement<R: Read>(reader: R, owner_id: &str) -> Result<Vec<Transaction>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();

    //NOTE: a whitespace-only line trims down to a single empty field and counts as blank
    let records = reader.records()
        .filter(|result| !result.as_ref().is_ok_and(is_blank));

    for (index, result) in records.enumerate() {
        let record = result.map_err(|source| LedgerError::Read { index, source })?;

        if record.len() != FIELD_COUNT {
            return Err(LedgerError::MalformedRecord { index, found: record.len() });
        }

        let transaction = to_transaction(&record, owner_id)
            .map_err(|source| LedgerError::invalid_field(index, source))?;

        transactions.push(transaction);
    }

    if transactions.is_empty() {
        return Err(LedgerError::EmptyInput);
    }

    debug!("Parsed {} statement lines for owner [{owner_id}]", transactions.len());

    Ok(transactions)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn to_transaction(record: &StringRecord, owner_id: &str) -> Result<Transaction, ValidationError> {
    let fields: Vec<&str> = record.iter().collect();

    validate_fields(fields.as_slice())?;

    Ok(Transaction {
        timestamp: parse_timestamp(fields[0])?,
        name: fields[1].trim().to_string(),
        transaction_type: fields[2].parse::<TransactionType>()?,
        amount: parse_amount(fields[3])?,
        status: fields[4].parse::<TransactionStatus>()?,
        description: fields[5].trim().to_string(),
        owner_id: owner_id.to_string()
    })
}
