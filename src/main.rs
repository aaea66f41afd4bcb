mod analytics;
mod config;
mod dashboard;
mod models;
mod report;
mod storage;
mod tui;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;
use crate::dashboard::refresh;
use crate::report::write_report;
use crate::storage::TableCache;

fn main() -> Result<()> {
    let config = Config::parse();

    setup_logging(config.log_level.into());

    let cache = TableCache::new();
    let options = config.dashboard_options();

    if !config.report {
        return tui::run(cache, config.path, options);
    }

    let timer = Instant::now();
    let dashboard = refresh(&cache, &config.path, &options)?;

    write_report(&mut BufWriter::new(stdout().lock()), &dashboard)?;

    info!("Report written in: {:?}", timer.elapsed());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the report and the terminal UI, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
