// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-level conversion: CSV export in, JSON array out.
//!
//! Every operation is all-or-nothing. A malformed row aborts the conversion
//! before anything is written, and output files are replaced atomically.

use crate::error::{ConvertError, Result};
use crate::models::ActivityRecord;
use crate::services::row::{map_row, split_line};
use crate::time_utils::ActivityZone;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Counts reported by [`Converter::append_csv_to_existing_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendSummary {
    /// Records already present in the JSON file
    pub existing: usize,
    /// Records converted from the CSV and appended
    pub appended: usize,
}

impl AppendSummary {
    pub fn total(&self) -> usize {
        self.existing + self.appended
    }
}

/// Converts Garmin activity exports into activity records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    zone: ActivityZone,
}

impl Converter {
    pub fn new(zone: ActivityZone) -> Self {
        Self { zone }
    }

    /// Convert the contents of an export. The first line is the header.
    pub fn convert_csv_str(&self, text: &str) -> Result<Vec<ActivityRecord>> {
        let mut records = Vec::new();

        for (index, line) in text.lines().enumerate().skip(1) {
            let line_number = index + 1;
            if line.trim().is_empty() {
                tracing::debug!(line = line_number, "Skipping blank line");
                continue;
            }
            let fields = split_line(line);
            records.push(map_row(&fields, line_number, self.zone)?);
        }

        Ok(records)
    }

    /// Read and convert an export file.
    pub fn convert_csv_to_json<P: AsRef<Path>>(
        &self,
        csv_path: P,
    ) -> Result<Vec<ActivityRecord>> {
        let path = csv_path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        let records = self.convert_csv_str(&text)?;
        tracing::info!(
            path = %path.display(),
            count = records.len(),
            zone = %self.zone,
            "Converted activity export"
        );
        Ok(records)
    }

    /// Convert an export and append its records to an existing JSON array.
    ///
    /// Existing entries are passed through untouched, whatever their shape;
    /// new records go at the end.
    pub fn append_csv_to_existing_json<P, Q>(
        &self,
        existing_json_path: P,
        csv_path: Q,
    ) -> Result<AppendSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let json_path = existing_json_path.as_ref();
        let mut records = load_json_file(json_path)?;
        let existing = records.len();

        let new_records = self.convert_csv_to_json(csv_path)?;
        let appended = new_records.len();
        for record in &new_records {
            let value = serde_json::to_value(record).map_err(|source| ConvertError::Json {
                path: json_path.to_path_buf(),
                source,
            })?;
            records.push(value);
        }

        save_to_json_file(&records, json_path)?;

        let summary = AppendSummary { existing, appended };
        tracing::info!(
            path = %json_path.display(),
            existing,
            appended,
            total = summary.total(),
            "Appended activities"
        );
        Ok(summary)
    }
}

/// Load a JSON array as raw values.
///
/// Entries are not checked against [`ActivityRecord`]: extra keys, floats in
/// integer fields and the like survive a load/save cycle unchanged.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_str(&data).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write records as a pretty-printed JSON array (2-space indent, UTF-8).
///
/// The array is written to a temporary file next to `output_path` and
/// renamed over it, so readers never see a partial file.
pub fn save_to_json_file<T, P>(records: &[T], output_path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = output_path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(dir, e))?;
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| ConvertError::io(tmp.path(), e))?;
    }

    let mut writer = BufWriter::new(tmp);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| ConvertError::io(path, e))?;

    let tmp = writer
        .into_inner()
        .map_err(|e| ConvertError::io(path, e.into_error()))?;
    tmp.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), count = records.len(), "Wrote activities");
    Ok(())
}

/// Convert an export file, interpreting start times in local time.
pub fn convert_csv_to_json<P: AsRef<Path>>(csv_path: P) -> Result<Vec<ActivityRecord>> {
    Converter::default().convert_csv_to_json(csv_path)
}

/// Append an export file to an existing JSON array, interpreting start times
/// in local time.
pub fn append_csv_to_existing_json<P, Q>(
    existing_json_path: P,
    csv_path: Q,
) -> Result<AppendSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Converter::default().append_csv_to_existing_json(existing_json_path, csv_path)
}
