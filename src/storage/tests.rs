use super::{read_table, TableCache, TableSource};

use anyhow::{anyhow, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::{tempdir, NamedTempFile};

use crate::models::{LoadError, TableView};
use crate::types::TransactionKind;

const PAYSIM_HEADER: &str = "step,type,amount,nameOrig,oldbalanceOrg,newbalanceOrig,nameDest,oldbalanceDest,newbalanceDest,isFraud,isFlaggedFraud";

fn create_temporary_csv(header: &str, lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{header}")?;

    for line in lines {
        writeln!(file, "{line}")?;
    }

    Ok(file)
}

fn paysim_fixture() -> Result<NamedTempFile> {
    create_temporary_csv(PAYSIM_HEADER, &[
        "1,PAYMENT,9839.64,C1231006815,170136.0,160296.36,M1979787155,0.0,0.0,0,0",
        "1,TRANSFER,181.0,C1305486145,181.0,0.0,C553264065,0.0,0.0,1,0",
        "1,CASH_OUT,181.0,C840083671,181.0,0.0,C38997010,21182.0,0.0,1,0",
        "1,DEBIT,5337.77,C712410124,41720.0,36382.23,C195600860,41898.0,40348.79,0,0",
    ])
}

#[test]
fn test_loader_reads_required_and_extra_columns() -> Result<()> {
    let file = paysim_fixture()?;
    let table = read_table(file.path())?;

    assert_eq!(table.len(), 4);
    assert_eq!(table.rows()[1].kind, TransactionKind::Transfer);
    assert!(table.rows()[1].is_fraud);
    assert!(!table.rows()[1].is_flagged_fraud);
    assert_eq!(table.rows()[0].balance_diff(), 170136.0 - 160296.36);

    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(names, PAYSIM_HEADER.split(',').collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_loader_skips_text_columns_when_collecting_numeric_ones() -> Result<()> {
    let file = paysim_fixture()?;
    let table = read_table(file.path())?;
    let view = TableView::full(&table);

    let numeric: Vec<&str> = view.numeric_columns().iter().map(|column| column.name).collect();

    assert_eq!(numeric, vec![
        "step", "amount", "oldbalanceOrg", "newbalanceOrig",
        "oldbalanceDest", "newbalanceDest", "isFraud", "isFlaggedFraud"
    ]);

    Ok(())
}

#[test]
fn test_loader_fails_for_missing_file() {
    let result = read_table(Path::new("definitely_missing_transactions.csv"));

    assert!(matches!(result, Err(LoadError::Open { .. })));
}

#[test]
fn test_loader_fails_for_missing_required_column() -> Result<()> {
    let file = create_temporary_csv("type,amount,oldbalanceOrg,newbalanceOrig,isFraud", &[
        "PAYMENT,10.0,100.0,90.0,0",
    ])?;

    let result = read_table(file.path());

    assert!(matches!(result, Err(LoadError::MissingColumn { column: "isFlaggedFraud", .. })));

    Ok(())
}

#[test]
fn test_loader_reports_line_of_malformed_row() -> Result<()> {
    let file = create_temporary_csv("type,amount,oldbalanceOrg,newbalanceOrig,isFraud,isFlaggedFraud", &[
        "PAYMENT,10.0,100.0,90.0,0,0",
        "PAYMENT,not-a-number,100.0,90.0,0,0",
    ])?;

    let result = read_table(file.path());

    assert!(matches!(result, Err(LoadError::MalformedRow { line: 3, .. })));

    Ok(())
}

#[test]
fn test_loader_rejects_flags_outside_zero_and_one() -> Result<()> {
    let file = create_temporary_csv("type,amount,oldbalanceOrg,newbalanceOrig,isFraud,isFlaggedFraud", &[
        "TRANSFER,10.0,100.0,90.0,2,0",
    ])?;

    assert!(matches!(read_table(file.path()), Err(LoadError::MalformedRow { .. })));

    Ok(())
}

#[test]
fn test_loader_accepts_header_only_file() -> Result<()> {
    let file = create_temporary_csv(PAYSIM_HEADER, &[])?;
    let table = read_table(file.path())?;

    assert!(table.is_empty());
    assert!(table.distinct_kinds().is_empty());

    Ok(())
}

#[test]
fn test_cache_serves_second_load_without_rereading_file() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("transactions.csv");
    fs::write(&path, format!("{PAYSIM_HEADER}\n1,PAYMENT,10.0,C1,100.0,90.0,M1,0.0,0.0,0,0\n"))?;

    let cache = TableCache::new();
    let first = cache.load(&path).map_err(|error| anyhow!("{error}"))?;
    fs::remove_file(&path)?;

    assert!(!path.exists());
    assert!(cache.contains(&path));

    let second = cache.load(&path).map_err(|error| anyhow!("{error}"))?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 1);

    Ok(())
}

#[test]
fn test_cache_invokes_loader_once_per_path() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let cache = TableCache::with_loader(move |path| {
        counter.fetch_add(1, Ordering::SeqCst);
        read_table(path)
    });

    let file = paysim_fixture()?;

    for _ in 0..3 {
        cache.load(file.path()).map_err(|error| anyhow!("{error}"))?;
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_cache_does_not_remember_failed_loads() {
    let cache = TableCache::new();
    let path = Path::new("missing_for_cache.csv");

    assert!(cache.load(path).is_err());
    assert!(!cache.contains(path));
    assert!(cache.load(path).is_err());
}
