use super::{group_thousands, money, percent, refresh, render, Artifact, DashboardOptions, FilterScope, Part, Section};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::models::{LoadError, Transaction, TransactionTable};
use crate::storage::{TableCache, TableSource};
use crate::types::{Selection, TransactionKind};

fn create_transaction(kind: TransactionKind, amount: f64, is_fraud: bool, is_flagged_fraud: bool) -> Transaction {
    Transaction {
        kind,
        amount,
        old_balance_origin: amount,
        new_balance_origin: 0.0,
        is_fraud,
        is_flagged_fraud
    }
}

fn sample_table() -> TransactionTable {
    TransactionTable::from_rows(vec![
        create_transaction(TransactionKind::Payment, 120.0, false, false),
        create_transaction(TransactionKind::Transfer, 90_000.0, true, true),
        create_transaction(TransactionKind::CashOut, 90_000.0, true, false),
        create_transaction(TransactionKind::Payment, 80.0, false, false),
        create_transaction(TransactionKind::CashIn, 3_000.0, false, false),
        create_transaction(TransactionKind::Transfer, 1_500.0, false, false),
    ])
}

fn transfer_only() -> DashboardOptions {
    DashboardOptions {
        selection: [TransactionKind::Transfer].into_iter().collect(),
        ..DashboardOptions::default()
    }
}

fn section<'a>(sections: &'a [Section], title: &str) -> Result<&'a Section> {
    sections.iter()
        .find(|section| section.title == title)
        .ok_or_else(|| anyhow!("section [{title}] missing"))
}

fn metric_values(section: &Section) -> Vec<String> {
    section.artifacts.iter()
        .flat_map(|artifact| match artifact {
            Artifact::Metrics(metrics) => metrics.iter().map(|metric| metric.value.clone()).collect(),
            _ => Vec::new()
        })
        .collect()
}

#[test]
fn test_sections_render_in_fixed_order() {
    let dashboard = render(&sample_table(), &DashboardOptions::default());
    let titles: Vec<&str> = dashboard.sections.iter().map(|section| section.title).collect();

    assert_eq!(titles, vec![
        "Key Performance Indicators (KPIs)",
        "Dataset Overview",
        "Transaction Type",
        "Fraud vs Non-Fraud",
        "Transaction Amounts (Fraud vs Non-Fraud)",
        "Balance Differences (Sender Account)",
        "Correlation Heatmap",
        "Fraud % by Transaction Type",
        "Fraud vs Non-Fraud Amounts",
        "System Flagged vs Actual Fraud",
    ]);

    let first_insight = dashboard.sections.iter().position(|section| section.part == Part::DeepInsights);
    assert_eq!(first_insight, Some(7));
}

#[test]
fn test_kpi_tiles_are_formatted() -> Result<()> {
    let dashboard = render(&sample_table(), &DashboardOptions::default());
    let kpis = section(&dashboard.sections, "Key Performance Indicators (KPIs)")?;

    assert_eq!(metric_values(kpis), vec!["6", "2", "33.33%", "$90,000.00"]);

    Ok(())
}

#[test]
fn test_trailing_scope_filters_only_from_heatmap_onwards() -> Result<()> {
    let dashboard = render(&sample_table(), &transfer_only());

    let flags: Vec<bool> = dashboard.sections.iter().map(|section| section.filtered).collect();
    assert_eq!(flags, vec![false, false, false, false, false, false, true, true, true, true]);

    let kpis = section(&dashboard.sections, "Key Performance Indicators (KPIs)")?;
    assert_eq!(metric_values(kpis)[0], "6");

    let flagged = section(&dashboard.sections, "System Flagged vs Actual Fraud")?;
    assert_eq!(metric_values(flagged), vec!["1", "1"]);

    assert_eq!(dashboard.total_rows, 6);
    assert_eq!(dashboard.working_rows, 2);

    Ok(())
}

#[test]
fn test_all_scope_filters_every_section() -> Result<()> {
    let options = DashboardOptions { scope: FilterScope::All, ..transfer_only() };
    let dashboard = render(&sample_table(), &options);

    assert!(dashboard.sections.iter().all(|section| section.filtered));

    let kpis = section(&dashboard.sections, "Key Performance Indicators (KPIs)")?;
    assert_eq!(metric_values(kpis), vec!["2", "1", "50.0%", "$90,000.00"]);

    Ok(())
}

#[test]
fn test_empty_selection_marks_nothing_filtered() {
    let dashboard = render(&sample_table(), &DashboardOptions::default());

    assert!(dashboard.sections.iter().all(|section| !section.filtered));
    assert_eq!(dashboard.working_rows, dashboard.total_rows);
    assert_eq!(dashboard.kinds, vec![
        TransactionKind::Payment,
        TransactionKind::Transfer,
        TransactionKind::CashOut,
        TransactionKind::CashIn,
    ]);
}

#[test]
fn test_amount_box_plot_is_clipped_and_series_are_not() -> Result<()> {
    let dashboard = render(&sample_table(), &DashboardOptions::default());

    let clipped = section(&dashboard.sections, "Transaction Amounts (Fraud vs Non-Fraud)")?;
    let series = section(&dashboard.sections, "Fraud vs Non-Fraud Amounts")?;

    match (&clipped.artifacts[0], &series.artifacts[0]) {
        (Artifact::BoxPlot(clipped), Artifact::BoxPlot(series)) => {
            assert_eq!(clipped.range, Some((0.0, 500_000.0)));
            assert_eq!(series.range, None);
            assert_eq!(series.groups.len(), 2);
            assert_eq!(series.groups[1].stats.map(|stats| stats.count), Some(2));
            assert_eq!(series.axis_range(), Some((80.0, 90_000.0)));
        }
        _ => return Err(anyhow!("expected box plots"))
    }

    Ok(())
}

#[test]
fn test_empty_table_renders_placeholders() -> Result<()> {
    let dashboard = render(&TransactionTable::from_rows(Vec::new()), &DashboardOptions::default());
    let kpis = section(&dashboard.sections, "Key Performance Indicators (KPIs)")?;

    assert_eq!(metric_values(kpis), vec!["0", "0", "n/a", "n/a"]);

    Ok(())
}

#[test]
fn test_number_formatting_helpers() -> Result<()> {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(6_362_620), "6,362,620");
    assert_eq!(money(Decimal::from_str("1467967.3")?), "$1,467,967.30");
    assert_eq!(money(Decimal::from_str("-12.345")?), "-$12.34");
    assert_eq!(percent(Decimal::from_str("40.00")?), "40.0%");
    assert_eq!(percent(Decimal::from_str("66.70")?), "66.7%");
    assert_eq!(percent(Decimal::from_str("33.33")?), "33.33%");
    assert_eq!(percent(Decimal::ZERO), "0.0%");

    Ok(())
}

struct CountingSource {
    calls: AtomicUsize,
    table: Arc<TransactionTable>
}

impl TableSource for CountingSource {
    fn load(&self, _path: &Path) -> Result<Arc<TransactionTable>, Arc<LoadError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.table.clone())
    }
}

#[test]
fn test_refresh_loads_through_source_each_cycle() -> Result<()> {
    let source = CountingSource { calls: AtomicUsize::new(0), table: Arc::new(sample_table()) };
    let path = Path::new("unused.csv");

    let first = refresh(&source, path, &DashboardOptions::default()).map_err(|error| anyhow!("{error}"))?;
    let second = refresh(&source, path, &transfer_only()).map_err(|error| anyhow!("{error}"))?;

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(first.working_rows, 6);
    assert_eq!(second.working_rows, 2);
    assert_eq!(second.selection, Selection::from_iter([TransactionKind::Transfer]));

    Ok(())
}

#[test]
fn test_refresh_surfaces_load_failures() {
    let cache = TableCache::new();
    let result = refresh(&cache, Path::new("no_such_dashboard_input.csv"), &DashboardOptions::default());

    assert!(matches!(result.as_ref().map_err(|error| error.as_ref()), Err(LoadError::Open { .. })));
}
