// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scalar conversions applied to individual export fields.

use crate::error::{ConvertError, Result};
use crate::models::Numeric;
use crate::time_utils::parse_clock_parts;

/// Placeholders the export uses for "no data".
const SENTINELS: [&str; 2] = ["0", "--"];

/// Map placeholder values to `None`.
pub fn normalize_sentinel(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !SENTINELS.contains(v))
}

/// Best-effort numeric parse: integer first, then float, otherwise `None`.
pub fn coerce_number(value: Option<&str>) -> Option<Numeric> {
    let value = value?;
    if let Ok(int) = value.parse::<i64>() {
        return Some(Numeric::Integer(int));
    }
    value.parse::<f64>().ok().map(Numeric::Float)
}

/// Convert a "MM:SS" per-kilometer pace to meters per second.
///
/// A zero pace has no finite speed and is rejected.
pub fn pace_to_speed(value: Option<&str>) -> Result<Option<f64>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let [minutes, seconds] = parse_clock_parts::<2>("pace", value)?;
    let pace_seconds = minutes * 60 + seconds;
    if pace_seconds == 0 {
        return Err(ConvertError::parse("pace", value, "zero pace"));
    }
    Ok(Some(1000.0 / pace_seconds as f64))
}
