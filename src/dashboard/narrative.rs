//! Fixed commentary printed under the charts. It describes the full PaySim
//! dataset and does not react to the selection.

pub const TRANSACTION_TYPES: &str = "\
- CASH_OUT and PAYMENT dominate the dataset with more than 2M transactions each.
- CASH_IN is moderately frequent at roughly 1.4M transactions.
- TRANSFER transactions are fewer but carry more of the fraud.
- DEBIT transactions are very rare.";

pub const FRAUD_SPLIT: &str = "\
- Fraudulent transactions are extremely rare, well under 0.2% of rows.
- The classes are severely imbalanced, which is a major obstacle for model training.
- Oversampling or undersampling is likely needed before fitting a classifier.";

pub const AMOUNTS: &str = "\
- Fraudulent transactions generally involve higher amounts than legitimate ones.
- Extreme outliers exist in the multi-million range.
- Transaction size should be treated as a key signal for detection.";

pub const BALANCE_DIFF: &str = "Fraud transactions show unusual balance changes on the sender account compared to legitimate ones.";

pub const CORRELATION: &str = "\
- oldbalanceOrg and newbalanceOrig are strongly correlated.
- isFraud relates to amount and to the destination balances.
- The matrix helps pick features for fraud detection models.";

pub const FRAUD_RATE: &str = "Fraud happens mostly in TRANSFER and CASH_OUT transactions.";

pub const AMOUNT_SERIES: &str = "Fraud transactions usually involve much higher amounts than normal ones.";

pub const FLAGGED: &str = "The rule-based system flags very few frauds compared to the actual fraud cases.";
