use super::{LedgerError, Transaction, TransactionStatus, TransactionType, TransactionView, UploadReceipt, ValidationError};

use anyhow::{anyhow, Result};
use chrono::DateTime;
use serde_json::json;

fn create_transaction(status: TransactionStatus) -> Result<Transaction> {
    Ok(Transaction {
        timestamp: DateTime::from_timestamp(1624507883, 0).ok_or_else(|| anyhow!("timestamp out of range"))?,
        name: "JOHN DOE".to_string(),
        transaction_type: TransactionType::Debit,
        amount: 250000,
        status,
        description: "restaurant".to_string(),
        owner_id: "owner-1".to_string()
    })
}

#[test]
fn test_enums_parse_case_insensitively_into_canonical_form() -> Result<()> {
    assert_eq!(" credit ".parse::<TransactionType>()?, TransactionType::Credit);
    assert_eq!("Debit".parse::<TransactionType>()?.to_string(), "DEBIT");
    assert_eq!("success".parse::<TransactionStatus>()?, TransactionStatus::Success);
    assert_eq!("Pending".parse::<TransactionStatus>()?.to_string(), "PENDING");

    assert_eq!("refund".parse::<TransactionType>(), Err(ValidationError::InvalidType("refund".to_string())));
    assert_eq!("DONE".parse::<TransactionStatus>(), Err(ValidationError::InvalidStatus("DONE".to_string())));

    Ok(())
}

#[test]
fn test_enum_ordering_matches_canonical_names() {
    assert!(TransactionType::Credit < TransactionType::Debit);
    assert!(TransactionStatus::Failed < TransactionStatus::Pending);
    assert!(TransactionStatus::Pending < TransactionStatus::Success);
}

#[test]
fn test_only_failed_and_pending_are_issues() -> Result<()> {
    assert!(create_transaction(TransactionStatus::Failed)?.is_issue());
    assert!(create_transaction(TransactionStatus::Pending)?.is_issue());
    assert!(!create_transaction(TransactionStatus::Success)?.is_issue());

    Ok(())
}

#[test]
fn test_transaction_renders_back_to_its_csv_columns() -> Result<()> {
    let fields = create_transaction(TransactionStatus::Failed)?.to_fields();

    assert_eq!(fields, ["1624507883", "JOHN DOE", "DEBIT", "250000", "FAILED", "restaurant"].map(String::from));

    Ok(())
}

#[test]
fn test_view_hides_owner_and_formats_timestamp_as_rfc3339() -> Result<()> {
    let view = TransactionView::from(&create_transaction(TransactionStatus::Pending)?);

    assert_eq!(
        serde_json::to_value(&view)?,
        json!({
            "timestamp": "2021-06-24T04:11:23Z",
            "name": "JOHN DOE",
            "type": "DEBIT",
            "amount": 250000,
            "status": "PENDING",
            "description": "restaurant"
        })
    );

    Ok(())
}

#[test]
fn test_upload_receipt_serializes_in_camel_case() -> Result<()> {
    assert_eq!(
        serde_json::to_value(UploadReceipt::success(4))?,
        json!({ "totalRows": 4, "status": "success" })
    );

    Ok(())
}

#[test]
fn test_error_messages_carry_record_index() {
    let malformed = LedgerError::MalformedRecord { index: 3, found: 5 };
    let invalid = LedgerError::invalid_field(7, ValidationError::MissingField("name"));

    assert_eq!(malformed.to_string(), "Malformed record 3: expected 6 fields, found 5");
    assert_eq!(invalid.to_string(), "Invalid record 7: name is required");
    assert_eq!(LedgerError::EmptyInput.to_string(), "Statement contains no transactions");
}

#[test]
fn test_field_count_failures_are_reported_as_malformed_records() {
    let error = LedgerError::invalid_field(2, ValidationError::FieldCount { found: 7 });

    assert!(matches!(error, LedgerError::MalformedRecord { index: 2, found: 7 }));
}
