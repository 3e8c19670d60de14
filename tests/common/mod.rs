// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use garmin_activities::models::columns;
use garmin_activities::{ActivityZone, Converter};
use std::fs;
use std::path::{Path, PathBuf};

/// Export fixture with two runs and one ride.
pub const FIXTURE_CSV: &str = "tests/fixtures/garmin_activities.csv";

/// Output of the fixture conversion with start times read as UTC.
#[allow(dead_code)]
pub const EXPECTED_JSON: &str = "tests/fixtures/expected_activities.json";

/// Converter with a fixed zone so Activity IDs don't depend on the host.
pub fn utc_converter() -> Converter {
    Converter::new(ActivityZone::Named(chrono_tz::UTC))
}

/// Quoted header line of the export.
pub fn header_line() -> String {
    quote_fields(columns::HEADER.iter().copied())
}

/// Build a quoted data line; unset columns hold the "--" placeholder.
#[allow(dead_code)]
pub fn data_line(values: &[(usize, &str)]) -> String {
    let mut fields = vec!["--"; columns::HEADER.len()];
    for (index, value) in values {
        fields[*index] = *value;
    }
    quote_fields(fields.into_iter())
}

fn quote_fields<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write an export made of the header plus `rows` into `dir`.
#[allow(dead_code)]
pub fn write_csv(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let mut text = header_line();
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, text).expect("Failed to write CSV fixture");
    path
}
