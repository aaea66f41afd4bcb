use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open transaction file [{path}]")]
    Open {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Could not read transaction file [{path}]")]
    Read {
        path: String,
        #[source]
        source: csv::Error
    },
    #[error("Transaction file [{path}] is missing required column [{column}]")]
    MissingColumn {
        path: String,
        column: &'static str
    },
    #[error("Malformed transaction at line [{line}] of [{path}]")]
    MalformedRow {
        path: String,
        line: u64,
        #[source]
        source: csv::Error
    }
}

impl LoadError {
    pub fn open(path: &Path, source: io::Error) -> Self {
        Self::Open { path: path.display().to_string(), source }
    }

    pub fn read(path: &Path, source: csv::Error) -> Self {
        Self::Read { path: path.display().to_string(), source }
    }

    pub fn missing_column(path: &Path, column: &'static str) -> Self {
        Self::MissingColumn { path: path.display().to_string(), column }
    }

    pub fn malformed_row(path: &Path, line: u64, source: csv::Error) -> Self {
        Self::MalformedRow { path: path.display().to_string(), line, source }
    }
}
