use crate::models::{TableView, Transaction};

/// Whisker reach as a multiple of the interquartile range.
const WHISKER_REACH: f64 = 1.5;

/// The figures a box plot draws for one group of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value within `WHISKER_REACH` IQRs below `q1`.
    pub lower_whisker: f64,
    /// Largest value within `WHISKER_REACH` IQRs above `q3`.
    pub upper_whisker: f64,
    /// Values beyond either whisker.
    pub outliers: usize
}

impl BoxStats {
    /// Summarizes the finite values of `values`; `None` if there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|value| value.is_finite()).collect();

        if sorted.is_empty() {
            return None;
        }

        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let reach = (q3 - q1) * WHISKER_REACH;

        let lower_whisker = sorted.iter().copied().find(|value| *value >= q1 - reach).unwrap_or(q1);
        let upper_whisker = sorted.iter().rev().copied().find(|value| *value <= q3 + reach).unwrap_or(q3);
        let outliers = sorted.iter().filter(|value| **value < lower_whisker || **value > upper_whisker).count();

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers
        })
    }
}

/// Linearly interpolated quantile of an ascending, non-empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// One value per transaction, split by the `isFraud` label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FraudGroups {
    pub legitimate: Vec<f64>,
    pub fraud: Vec<f64>
}

pub fn split_by_fraud<F>(view: &TableView, value: F) -> FraudGroups
where
    F: Fn(&Transaction) -> f64,
{
    let mut groups = FraudGroups::default();

    for transaction in view.transactions() {
        if transaction.is_fraud {
            groups.fraud.push(value(transaction));
        } else {
            groups.legitimate.push(value(transaction));
        }
    }

    groups
}
