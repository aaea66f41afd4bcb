use std::collections::BTreeMap;

use crate::models::TableView;
use crate::types::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub kind: TransactionKind,
    pub count: usize
}

/// Rows per transaction kind, most frequent first. Equal counts keep first-seen order.
pub fn category_counts(view: &TableView) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for transaction in view.transactions() {
        match counts.iter_mut().find(|entry| entry.kind == transaction.kind) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount { kind: transaction.kind, count: 1 })
        }
    }

    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRate {
    pub kind: TransactionKind,
    /// Mean of `isFraud` within the kind, as a percentage.
    pub fraud_rate: f64
}

/// Fraud rate per transaction kind, ordered by kind label.
pub fn fraud_rate_by_kind(view: &TableView) -> Vec<CategoryRate> {
    let mut groups: BTreeMap<TransactionKind, (usize, usize)> = BTreeMap::new();

    for transaction in view.transactions() {
        let (total, fraud) = groups.entry(transaction.kind).or_default();
        *total += 1;
        *fraud += usize::from(transaction.is_fraud);
    }

    groups.into_iter()
        .map(|(kind, (total, fraud))| CategoryRate {
            kind,
            fraud_rate: fraud as f64 / total as f64 * 100.0
        })
        .collect()
}
