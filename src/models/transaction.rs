use serde::{de, Deserialize, Deserializer};

use crate::types::TransactionKind;

/// The columns of a transaction row that the dashboard consumes.
///
/// Remaining columns of the input file are carried by the owning table as
/// extra columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    /// Originating account balance before the transaction.
    #[serde(rename = "oldbalanceOrg")]
    pub old_balance_origin: f64,
    /// Originating account balance after the transaction.
    #[serde(rename = "newbalanceOrig")]
    pub new_balance_origin: f64,
    /// Ground-truth fraud label.
    #[serde(rename = "isFraud", deserialize_with = "deserialize_flag")]
    pub is_fraud: bool,
    /// Verdict of the rule-based flagging system.
    #[serde(rename = "isFlaggedFraud", deserialize_with = "deserialize_flag")]
    pub is_flagged_fraud: bool
}

impl Transaction {
    /// How much the originating account's balance dropped.
    pub fn balance_diff(&self) -> f64 {
        self.old_balance_origin - self.new_balance_origin
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(de::Error::custom(format!("expected a 0/1 flag, found {other}")))
    }
}
