// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - conversion pipeline.

pub mod converter;
pub mod fields;
pub mod row;

pub use converter::{
    append_csv_to_existing_json, convert_csv_to_json, load_json_file, save_to_json_file,
    AppendSummary, Converter,
};
pub use fields::{coerce_number, normalize_sentinel, pace_to_speed};
pub use row::{map_row, repair_locale_decimals, split_line};
