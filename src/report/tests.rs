use super::plot::{bar_length, box_strip, scale};
use super::write_report;

use anyhow::{anyhow, Result};

use crate::analytics::BoxStats;
use crate::dashboard::{render, DashboardOptions};
use crate::models::{Transaction, TransactionTable};
use crate::types::TransactionKind;

fn sample_table() -> TransactionTable {
    let rows = [
        (TransactionKind::Payment, 9_839.64, false),
        (TransactionKind::Transfer, 181.0, true),
        (TransactionKind::CashOut, 181.0, true),
        (TransactionKind::Payment, 1_864.28, false),
        (TransactionKind::Debit, 5_337.77, false),
    ];

    TransactionTable::from_rows(rows.into_iter()
        .map(|(kind, amount, is_fraud)| Transaction {
            kind,
            amount,
            old_balance_origin: amount,
            new_balance_origin: 0.0,
            is_fraud,
            is_flagged_fraud: false
        })
        .collect())
}

fn report_for(options: &DashboardOptions) -> Result<String> {
    let dashboard = render(&sample_table(), options);
    let mut output = Vec::new();
    write_report(&mut output, &dashboard)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_report_lists_sections_in_order() -> Result<()> {
    let report = report_for(&DashboardOptions::default())?;

    let positions: Vec<usize> = [
        "## Key Performance Indicators (KPIs)",
        "## Dataset Overview",
        "## Transaction Type",
        "## Fraud vs Non-Fraud",
        "## Transaction Amounts (Fraud vs Non-Fraud)",
        "## Balance Differences (Sender Account)",
        "## Correlation Heatmap",
        "Deep Insights on Fraud Data",
        "## Fraud % by Transaction Type",
        "## Fraud vs Non-Fraud Amounts",
        "## System Flagged vs Actual Fraud",
    ]
    .iter()
    .map(|heading| report.find(heading).ok_or_else(|| anyhow!("[{heading}] missing from report")))
    .collect::<Result<_>>()?;

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    Ok(())
}

#[test]
fn test_report_prints_kpis_and_filter_line() -> Result<()> {
    let report = report_for(&DashboardOptions::default())?;

    assert!(report.contains("Filter: all types (5 of 5 rows)"));
    assert!(report.contains("Total Transactions: 5"));
    assert!(report.contains("Fraud Cases: 2"));
    assert!(report.contains("Fraud %: 40.0%"));
    assert!(report.contains("Avg Fraud Amount: $181.00"));
    assert!(report.contains("Actual Fraud Cases: 2"));
    assert!(report.contains("Flagged Fraud Cases: 0"));

    Ok(())
}

#[test]
fn test_report_marks_filtered_sections() -> Result<()> {
    let options = DashboardOptions {
        selection: [TransactionKind::Payment].into_iter().collect(),
        ..DashboardOptions::default()
    };
    let report = report_for(&options)?;

    assert!(report.contains("Filter: PAYMENT (2 of 5 rows)"));
    assert!(report.contains("## Correlation Heatmap (filtered)"));
    assert!(report.contains("## Transaction Type\n"));
    assert!(report.contains("Actual Fraud Cases: 0"));

    Ok(())
}

#[test]
fn test_report_preview_contains_header_and_rows() -> Result<()> {
    let report = report_for(&DashboardOptions { preview_rows: 2, ..DashboardOptions::default() })?;

    assert!(report.contains("type"));
    assert!(report.contains("isFlaggedFraud"));
    assert!(report.contains("9839.64"));
    assert!(report.contains("TRANSFER"));
    assert!(!report.contains("1864.28"));

    Ok(())
}

#[test]
fn test_scale_maps_range_onto_columns() {
    assert_eq!(scale(0.0, (0.0, 100.0), 11), 0);
    assert_eq!(scale(50.0, (0.0, 100.0), 11), 5);
    assert_eq!(scale(100.0, (0.0, 100.0), 11), 10);
    assert_eq!(scale(1_000.0, (0.0, 100.0), 11), 10);
    assert_eq!(scale(-5.0, (0.0, 100.0), 11), 0);
    assert_eq!(scale(5.0, (3.0, 3.0), 11), 0);
}

#[test]
fn test_bar_length_keeps_small_values_visible() {
    assert_eq!(bar_length(100.0, 100.0, 40), 40);
    assert_eq!(bar_length(0.1, 100.0, 40), 1);
    assert_eq!(bar_length(0.0, 100.0, 40), 0);
    assert_eq!(bar_length(5.0, 0.0, 40), 0);
}

#[test]
fn test_box_strip_draws_whiskers_box_and_median() -> Result<()> {
    let stats = BoxStats::from_values(&[0.0, 2.0, 5.0, 8.0, 10.0]).ok_or_else(|| anyhow!("stats missing"))?;
    let strip = box_strip(&stats, (0.0, 10.0), 11);

    assert_eq!(strip, "+-===|===-+");

    Ok(())
}
