
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::dashboard::{DashboardOptions, FilterScope};
use crate::types::{Selection, TransactionKind};

pub const DEFAULT_PATH: &str = "data/PS_20174392719_1491204439457_log.csv";

/// Command line of the dashboard binary.
#[derive(Debug, Parser)]
#[command(
    name = "fraud-dashboard",
    version,
    about = "Fraud analysis dashboard over a CSV of mobile money transactions"
)]
pub struct Config {
    /// CSV file to load
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Print a text report to stdout instead of starting the terminal UI
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Initial transaction type selection; repeat for several types
    #[arg(long = "type", value_name = "KIND")]
    pub kinds: Vec<TransactionKind>,

    /// Which sections the type filter narrows
    #[arg(long, value_enum, default_value_t = FilterScope::Trailing)]
    pub filter_scope: FilterScope,

    /// Rows shown in the dataset preview
    #[arg(long, default_value_t = 5)]
    pub preview_rows: usize,

    /// Log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel
}

impl Config {
    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            selection: self.kinds.iter().copied().collect::<Selection>(),
            scope: self.filter_scope,
            preview_rows: self.preview_rows
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}
