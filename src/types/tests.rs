use super::{Pagination, SortDirection, SortField, Sorting, DEFAULT_PAGE_SIZE};
use crate::models::LedgerError;
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_pagination_clamps_page_and_limit_below_one() {
    let pagination = Pagination::new(0, -5);

    assert_eq!(pagination.effective_page(), 1);
    assert_eq!(pagination.effective_limit(), DEFAULT_PAGE_SIZE);
    assert_eq!(pagination.window(25), 0..10);
}

#[test]
fn test_pagination_window_is_truncated_at_total() {
    assert_eq!(Pagination::new(1, 2).window(4), 0..2);
    assert_eq!(Pagination::new(2, 2).window(4), 2..4);
    assert_eq!(Pagination::new(2, 3).window(4), 3..4);
}

#[test]
fn test_pagination_window_past_the_end_is_empty() {
    assert!(Pagination::new(3, 2).window(4).is_empty());
    assert!(Pagination::new(1, 10).window(0).is_empty());
    assert!(Pagination::new(i64::MAX, i64::MAX).window(4).is_empty());
}

#[test]
fn test_sort_direction_only_flips_on_desc() {
    assert_eq!(SortDirection::from("DESC"), SortDirection::Descending);
    assert_eq!(SortDirection::from(" desc "), SortDirection::Descending);
    assert_eq!(SortDirection::from("ASC"), SortDirection::Ascending);
    assert_eq!(SortDirection::from(""), SortDirection::Ascending);
    assert_eq!(SortDirection::from("sideways"), SortDirection::Ascending);
}

#[test]
fn test_sort_field_parses_case_insensitively() -> Result<()> {
    let test_cases = vec![
        ("timestamp", SortField::Timestamp),
        ("NAME", SortField::Name),
        ("Amount", SortField::Amount),
        ("type", SortField::Type),
        ("sTaTuS", SortField::Status),
        ("", SortField::Timestamp),
    ];

    for (input, expected) in test_cases {
        assert_eq!(SortField::from_str(input)?, expected);
    }

    Ok(())
}

#[test]
fn test_sort_field_rejects_unknown_columns() {
    let result = SortField::from_str("description");

    assert!(matches!(result, Err(LedgerError::InvalidSortField { ref field }) if field == "description"));
}

#[test]
fn test_sorting_defaults_to_ascending_timestamp() -> Result<()> {
    let sorting = Sorting::default();

    assert_eq!(sorting.sort_field()?, SortField::Timestamp);
    assert_eq!(sorting.sort_direction(), SortDirection::Ascending);

    Ok(())
}
