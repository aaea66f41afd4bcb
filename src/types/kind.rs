use crate::types::errors::ParseKindError;
use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The category of a transaction as recorded in the `type` column.
///
/// Variants are declared in label order so that `Ord` matches the order a
/// group-by over the raw labels would produce.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    CashIn,
    CashOut,
    Debit,
    Payment,
    Transfer
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 5] = [
        TransactionKind::CashIn,
        TransactionKind::CashOut,
        TransactionKind::Debit,
        TransactionKind::Payment,
        TransactionKind::Transfer
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::CashIn => "CASH_IN",
            TransactionKind::CashOut => "CASH_OUT",
            TransactionKind::Debit => "DEBIT",
            TransactionKind::Payment => "PAYMENT",
            TransactionKind::Transfer => "TRANSFER"
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase().replace(['-', ' '], "_");

        TransactionKind::ALL
            .into_iter()
            .find(|kind| kind.label() == normalized)
            .ok_or_else(|| ParseKindError::Unknown(value.to_string()))
    }
}
