// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin activity export converter
//!
//! Reads a Garmin Connect CSV export and writes (or extends) the JSON array
//! of activity records consumed by the dashboard.

use anyhow::Context;
use garmin_activities::{
    config::{Config, ConvertMode},
    save_to_json_file, Converter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        csv = %config.csv_path.display(),
        json = %config.json_path.display(),
        mode = ?config.mode,
        zone = %config.zone,
        "Starting activity conversion"
    );

    let converter = Converter::new(config.zone);
    let result = match config.mode {
        ConvertMode::Overwrite => converter
            .convert_csv_to_json(&config.csv_path)
            .and_then(|records| save_to_json_file(&records, &config.json_path)),
        ConvertMode::Append => converter
            .append_csv_to_existing_json(&config.json_path, &config.csv_path)
            .map(|_| ()),
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Conversion failed");
    }
    result.context("Activity conversion failed")
}

/// Initialize structured JSON logging on stderr.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("garmin_activities=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
