//! Timesheet entry point.

use anyhow::Context;
use clap::Parser;
use timesheet::sheet::load_file;
use timesheet::{TimesheetConfig, summarize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,timesheet=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TimesheetConfig::parse();
    tracing::debug!(?config, "configuration loaded");

    let mut durations = config.durations.clone();
    if let Some(path) = &config.file {
        durations.extend(load_file(path).context("loading durations file")?);
    }

    if durations.is_empty() {
        tracing::info!("no durations given, total is zero");
    }

    let summary = summarize(&durations, config.start, config.end_of_day)?;
    tracing::info!(entries = summary.entries, total = %summary.total, "timesheet summed");

    println!("{summary}");
    Ok(())
}
