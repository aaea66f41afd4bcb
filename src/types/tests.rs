use super::errors::ParseKindError;
use super::{Selection, TransactionKind};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_kind_parses_labels_case_insensitively() -> Result<()> {
    let test_cases = vec![
        ("CASH_IN", TransactionKind::CashIn),
        ("cash_out", TransactionKind::CashOut),
        ("  Debit ", TransactionKind::Debit),
        ("payment", TransactionKind::Payment),
        ("transfer", TransactionKind::Transfer),
        ("cash-in", TransactionKind::CashIn),
    ];

    for (input, expected) in test_cases {
        assert_eq!(TransactionKind::from_str(input)?, expected);
    }

    Ok(())
}

#[test]
fn test_kind_rejects_unknown_labels() {
    assert_eq!(
        TransactionKind::from_str("WIRE"),
        Err(ParseKindError::Unknown("WIRE".to_string()))
    );
    assert!(TransactionKind::from_str("").is_err());
}

#[test]
fn test_kind_ordering_follows_label_order() {
    let mut labels: Vec<&str> = TransactionKind::ALL.iter().map(|kind| kind.label()).collect();
    labels.sort();

    let ordered: Vec<&str> = TransactionKind::ALL.iter().map(|kind| kind.label()).collect();

    assert_eq!(labels, ordered);
    assert!(TransactionKind::CashOut < TransactionKind::Transfer);
}

#[test]
fn test_selection_toggle_adds_and_removes() {
    let mut selection = Selection::new();

    assert!(selection.toggle(TransactionKind::Transfer));
    assert!(selection.contains(TransactionKind::Transfer));
    assert_eq!(selection.len(), 1);

    assert!(!selection.toggle(TransactionKind::Transfer));
    assert!(selection.is_empty());
}

#[test]
fn test_selection_display_lists_labels_or_all() {
    let selection: Selection = [TransactionKind::Transfer, TransactionKind::CashOut].into_iter().collect();

    assert_eq!(selection.to_string(), "CASH_OUT, TRANSFER");
    assert_eq!(Selection::new().to_string(), "all types");
}
