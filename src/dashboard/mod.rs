mod format;
mod narrative;
#[cfg(test)]
mod tests;

use clap::ValueEnum;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::analytics::{
    category_counts, compare_flags, compute_kpis, correlation_matrix, fraud_rate_by_kind, fraud_split,
    split_by_fraud, BoxStats, CorrelationMatrix, FraudGroups
};
use crate::models::{LoadError, Preview, TableView, TransactionTable};
use crate::storage::TableSource;
use crate::types::{Selection, TransactionKind};

pub use format::{group_thousands, money, percent, UNAVAILABLE};

pub const TITLE: &str = "Financial Transaction Fraud Analysis Dashboard";

/// Visible y-range of the amount box plot in the overview part.
const AMOUNT_AXIS_LIMIT: (f64, f64) = (0.0, 500_000.0);

const LEGITIMATE_LABEL: &str = "Not Fraud";
const FRAUD_LABEL: &str = "Fraud";

/// Which sections the category filter narrows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterScope {
    /// Only the sections from the correlation heatmap onwards.
    #[default]
    Trailing,
    /// Every section, KPIs included.
    All
}

/// The inputs of one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub selection: Selection,
    pub scope: FilterScope,
    pub preview_rows: usize
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            selection: Selection::new(),
            scope: FilterScope::default(),
            preview_rows: 5
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Overview,
    DeepInsights
}

impl Part {
    pub fn title(&self) -> &'static str {
        match self {
            Part::Overview => TITLE,
            Part::DeepInsights => "Deep Insights on Fraud Data"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// What the bar length measures.
    pub measure: &'static str,
    /// Suffix appended to rendered values.
    pub unit: &'static str,
    pub bars: Vec<Bar>
}

impl BarSeries {
    pub fn format_value(&self, value: f64) -> String {
        if self.unit.is_empty() {
            group_thousands(value.max(0.0).round() as usize)
        } else {
            format!("{value:.2}{}", self.unit)
        }
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub count: usize,
    pub percent: Option<f64>
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: &'static str,
    pub stats: Option<BoxStats>
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlot {
    /// Name of the plotted value.
    pub measure: &'static str,
    pub groups: Vec<BoxGroup>,
    /// Fixed axis range; `None` fits the data.
    pub range: Option<(f64, f64)>
}

impl BoxPlot {
    fn by_fraud(measure: &'static str, groups: FraudGroups, range: Option<(f64, f64)>) -> Self {
        Self {
            measure,
            groups: vec![
                BoxGroup { label: LEGITIMATE_LABEL, stats: BoxStats::from_values(&groups.legitimate) },
                BoxGroup { label: FRAUD_LABEL, stats: BoxStats::from_values(&groups.fraud) },
            ],
            range
        }
    }

    /// The axis range to draw: the fixed range if any, else whisker to whisker.
    pub fn axis_range(&self) -> Option<(f64, f64)> {
        if self.range.is_some() {
            return self.range;
        }

        let stats: Vec<&BoxStats> = self.groups.iter().filter_map(|group| group.stats.as_ref()).collect();
        let low = stats.iter().map(|stats| stats.lower_whisker).reduce(f64::min)?;
        let high = stats.iter().map(|stats| stats.upper_whisker).reduce(f64::max)?;

        Some((low, high))
    }
}

/// One renderable element of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Metrics(Vec<Metric>),
    Preview(Preview),
    Bars(BarSeries),
    Pie(Vec<Slice>),
    BoxPlot(BoxPlot),
    Heatmap(CorrelationMatrix)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub part: Part,
    pub artifacts: Vec<Artifact>,
    pub narrative: Option<&'static str>,
    /// Whether the section was computed over the filtered view.
    pub filtered: bool
}

/// Everything one render cycle produces, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub sections: Vec<Section>,
    pub selection: Selection,
    /// Choices offered by the category filter.
    pub kinds: Vec<TransactionKind>,
    pub total_rows: usize,
    pub working_rows: usize
}

/// Renders the dashboard for the given table and selection.
pub fn render(table: &TransactionTable, options: &DashboardOptions) -> Dashboard {
    let full = TableView::full(table);
    let working = TableView::filtered(table, &options.selection);
    let leading = match options.scope {
        FilterScope::Trailing => &full,
        FilterScope::All => &working
    };

    let kpis = compute_kpis(leading);
    let split = fraud_split(leading);
    let flags = compare_flags(&working);

    let sections = vec![
        Section {
            title: "Key Performance Indicators (KPIs)",
            part: Part::Overview,
            artifacts: vec![Artifact::Metrics(vec![
                Metric { label: "Total Transactions", value: group_thousands(kpis.total_transactions) },
                Metric { label: "Fraud Cases", value: group_thousands(kpis.total_fraud) },
                Metric {
                    label: "Fraud %",
                    value: kpis.fraud_percentage.map_or_else(|| UNAVAILABLE.to_string(), percent)
                },
                Metric {
                    label: "Avg Fraud Amount",
                    value: kpis.avg_fraud_amount.map_or_else(|| UNAVAILABLE.to_string(), money)
                },
            ])],
            narrative: None,
            filtered: leading.is_filtered()
        },
        Section {
            title: "Dataset Overview",
            part: Part::Overview,
            artifacts: vec![Artifact::Preview(leading.head(options.preview_rows))],
            narrative: None,
            filtered: leading.is_filtered()
        },
        Section {
            title: "Transaction Type",
            part: Part::Overview,
            artifacts: vec![Artifact::Bars(BarSeries {
                measure: "count",
                unit: "",
                bars: category_counts(leading).into_iter()
                    .map(|entry| Bar { label: entry.kind.to_string(), value: entry.count as f64 })
                    .collect()
            })],
            narrative: Some(narrative::TRANSACTION_TYPES),
            filtered: leading.is_filtered()
        },
        Section {
            title: "Fraud vs Non-Fraud",
            part: Part::Overview,
            artifacts: vec![Artifact::Pie(vec![
                Slice { label: LEGITIMATE_LABEL, count: split.legitimate, percent: split.share(false) },
                Slice { label: FRAUD_LABEL, count: split.fraud, percent: split.share(true) },
            ])],
            narrative: Some(narrative::FRAUD_SPLIT),
            filtered: leading.is_filtered()
        },
        Section {
            title: "Transaction Amounts (Fraud vs Non-Fraud)",
            part: Part::Overview,
            artifacts: vec![Artifact::BoxPlot(BoxPlot::by_fraud(
                "amount",
                split_by_fraud(leading, |transaction| transaction.amount),
                Some(AMOUNT_AXIS_LIMIT)
            ))],
            narrative: Some(narrative::AMOUNTS),
            filtered: leading.is_filtered()
        },
        Section {
            title: "Balance Differences (Sender Account)",
            part: Part::Overview,
            artifacts: vec![Artifact::BoxPlot(BoxPlot::by_fraud(
                "balance_diff",
                split_by_fraud(leading, |transaction| transaction.balance_diff()),
                None
            ))],
            narrative: Some(narrative::BALANCE_DIFF),
            filtered: leading.is_filtered()
        },
        Section {
            title: "Correlation Heatmap",
            part: Part::Overview,
            artifacts: vec![Artifact::Heatmap(correlation_matrix(&working))],
            narrative: Some(narrative::CORRELATION),
            filtered: working.is_filtered()
        },
        Section {
            title: "Fraud % by Transaction Type",
            part: Part::DeepInsights,
            artifacts: vec![Artifact::Bars(BarSeries {
                measure: "fraud rate",
                unit: "%",
                bars: fraud_rate_by_kind(&working).into_iter()
                    .map(|entry| Bar { label: entry.kind.to_string(), value: entry.fraud_rate })
                    .collect()
            })],
            narrative: Some(narrative::FRAUD_RATE),
            filtered: working.is_filtered()
        },
        Section {
            title: "Fraud vs Non-Fraud Amounts",
            part: Part::DeepInsights,
            artifacts: vec![Artifact::BoxPlot(BoxPlot::by_fraud(
                "amount",
                split_by_fraud(&working, |transaction| transaction.amount),
                None
            ))],
            narrative: Some(narrative::AMOUNT_SERIES),
            filtered: working.is_filtered()
        },
        Section {
            title: "System Flagged vs Actual Fraud",
            part: Part::DeepInsights,
            artifacts: vec![Artifact::Metrics(vec![
                Metric { label: "Actual Fraud Cases", value: flags.actual.to_string() },
                Metric { label: "Flagged Fraud Cases", value: flags.flagged.to_string() },
            ])],
            narrative: Some(narrative::FLAGGED),
            filtered: working.is_filtered()
        },
    ];

    Dashboard {
        sections,
        selection: options.selection.clone(),
        kinds: table.distinct_kinds(),
        total_rows: table.len(),
        working_rows: working.len()
    }
}

/// Runs one full render cycle: fetch the table through `source`, then render it.
///
/// # Errors
/// Returns the loader's error if the table cannot be produced.
pub fn refresh<S>(source: &S, path: &Path, options: &DashboardOptions) -> Result<Dashboard, Arc<LoadError>>
where
    S: TableSource + ?Sized,
{
    let table = source.load(path)?;
    let timer = Instant::now();
    let dashboard = render(&table, options);

    debug!(
        "Rendered {} sections for [{}] over {} of {} rows in {:?}",
        dashboard.sections.len(), options.selection, dashboard.working_rows, dashboard.total_rows, timer.elapsed()
    );

    Ok(dashboard)
}
