// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Garmin activities: normalize Garmin Connect CSV exports into JSON
//!
//! This crate converts the Norwegian-locale activity export into an array of
//! activity records with renamed fields, converted units and explicit nulls.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{ConvertError, Result};
pub use models::ActivityRecord;
pub use services::{
    append_csv_to_existing_json, convert_csv_to_json, save_to_json_file, AppendSummary, Converter,
};
pub use time_utils::ActivityZone;
