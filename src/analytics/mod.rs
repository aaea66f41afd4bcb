mod category;
mod correlation;
mod distribution;
mod kpi;

pub use category::{category_counts, fraud_rate_by_kind};
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use distribution::{split_by_fraud, BoxStats, FraudGroups};
pub use kpi::{compare_flags, compute_kpis, fraud_split};
