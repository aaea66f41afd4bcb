use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKindError {
    #[error("Unknown transaction type [{0}] (expected one of CASH_IN, CASH_OUT, DEBIT, PAYMENT, TRANSFER)")]
    Unknown(String)
}
