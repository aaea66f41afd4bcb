use rust_decimal::Decimal;
use tracing::warn;

use crate::models::TableView;

const KPI_DECIMAL_PLACES: u32 = 2;

/// Headline figures shown as the dashboard's first row of tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_transactions: usize,
    pub total_fraud: usize,
    /// `None` when the view holds no transactions.
    pub fraud_percentage: Option<Decimal>,
    /// `None` when the view holds no fraudulent transactions.
    pub avg_fraud_amount: Option<Decimal>
}

pub fn compute_kpis(view: &TableView) -> Kpis {
    let total_transactions = view.len();
    let mut total_fraud = 0usize;
    let mut fraud_amount = 0.0;

    for transaction in view.transactions().filter(|transaction| transaction.is_fraud) {
        total_fraud += 1;
        fraud_amount += transaction.amount;
    }

    let fraud_percentage = if total_transactions > 0 {
        round(total_fraud as f64 / total_transactions as f64 * 100.0)
    } else {
        warn!("No transactions to compute a fraud percentage from");
        None
    };

    let avg_fraud_amount = if total_fraud > 0 {
        round(fraud_amount / total_fraud as f64)
    } else {
        None
    };

    Kpis {
        total_transactions,
        total_fraud,
        fraud_percentage,
        avg_fraud_amount
    }
}

/// Row counts on each side of the `isFraud` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FraudSplit {
    pub legitimate: usize,
    pub fraud: usize
}

impl FraudSplit {
    pub fn total(&self) -> usize {
        self.legitimate + self.fraud
    }

    /// Percentage of rows on the requested side, `None` for an empty split.
    pub fn share(&self, fraud: bool) -> Option<f64> {
        let total = self.total();

        if total == 0 {
            return None;
        }

        let count = if fraud { self.fraud } else { self.legitimate };
        Some(count as f64 / total as f64 * 100.0)
    }
}

pub fn fraud_split(view: &TableView) -> FraudSplit {
    let fraud = view.transactions().filter(|transaction| transaction.is_fraud).count();

    FraudSplit {
        legitimate: view.len() - fraud,
        fraud
    }
}

/// Actual fraud cases next to the ones the rule-based system flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagComparison {
    pub actual: usize,
    pub flagged: usize
}

pub fn compare_flags(view: &TableView) -> FlagComparison {
    view.transactions().fold(FlagComparison { actual: 0, flagged: 0 }, |mut comparison, transaction| {
        comparison.actual += usize::from(transaction.is_fraud);
        comparison.flagged += usize::from(transaction.is_flagged_fraud);
        comparison
    })
}

fn round(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|decimal| decimal.round_dp(KPI_DECIMAL_PLACES))
}
