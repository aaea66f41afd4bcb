use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::models::{ColumnData, ExtraColumn, LoadError, Transaction, TransactionTable, REQUIRED_COLUMNS};

/// Reads the whole CSV at `path` into memory.
///
/// # Errors
/// Returns `LoadError` if:
/// - The file cannot be opened or its header cannot be read.
/// - A required column is absent from the header.
/// - Any record is malformed. The first bad record aborts the load.
pub fn read_table(path: &Path) -> Result<TransactionTable, LoadError> {
    let timer = Instant::now();
    let file = File::open(path).map_err(|error| LoadError::open(path, error))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()
        .map_err(|error| LoadError::read(path, error))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::missing_column(path, column));
        }
    }

    let extra_positions: Vec<usize> = headers.iter()
        .enumerate()
        .filter(|(_, header)| !REQUIRED_COLUMNS.contains(header))
        .map(|(position, _)| position)
        .collect();

    let mut extra_cells: Vec<Vec<String>> = vec![Vec::new(); extra_positions.len()];
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => {
                let line = error.position().map_or(0, |position| position.line());
                return Err(LoadError::malformed_row(path, line, error));
            }
        }

        let line = record.position().map_or(0, |position| position.line());
        let transaction: Transaction = record.deserialize(Some(&headers))
            .map_err(|error| LoadError::malformed_row(path, line, error))?;

        for (cells, position) in extra_cells.iter_mut().zip(&extra_positions) {
            cells.push(record.get(*position).unwrap_or_default().to_string());
        }

        rows.push(transaction);
    }

    let extras: Vec<ExtraColumn> = extra_positions.iter()
        .zip(extra_cells)
        .map(|(position, cells)| ExtraColumn {
            name: headers[*position].to_string(),
            data: ColumnData::infer(cells)
        })
        .collect();

    for extra in &extras {
        debug!("Column [{}] inferred as {}", extra.name, match extra.data {
            ColumnData::Numeric(_) => "numeric",
            ColumnData::Text(_) => "text"
        });
    }

    let table = TransactionTable::new(headers.iter().map(String::from).collect(), rows, extras);

    info!("Loaded {} transactions from [{}] in {:?}", table.len(), path.display(), timer.elapsed());

    Ok(table)
}
