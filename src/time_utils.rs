// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use crate::error::{ConvertError, Result};
use chrono::{Duration, Local, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Format of the export's start time column.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time zone used to turn the export's naive start times into Unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityZone {
    /// The zone of the machine running the conversion
    #[default]
    Local,
    Named(Tz),
}

impl ActivityZone {
    /// Unix timestamp (seconds) of a naive wall-clock time in this zone.
    ///
    /// Ambiguous times (DST fall-back) resolve to the earliest instant.
    /// Times skipped by a DST jump use the offset in effect before the jump.
    pub fn timestamp(&self, naive: &NaiveDateTime) -> Result<i64> {
        let resolved = match self {
            ActivityZone::Local => resolve(&Local, naive),
            ActivityZone::Named(tz) => resolve(tz, naive),
        };
        resolved.ok_or_else(|| {
            ConvertError::parse(
                "start time",
                &naive.format(START_TIME_FORMAT).to_string(),
                format!("does not exist in time zone {self}"),
            )
        })
    }
}

/// Longest backwards search for the offset preceding a skipped local time.
const MAX_GAP_HOURS: i64 = 48;

fn resolve<T: TimeZone>(tz: &T, naive: &NaiveDateTime) -> Option<i64> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt.timestamp());
    }

    // Skipped by a forward jump: read the wall clock with the earlier offset
    (1..=MAX_GAP_HOURS)
        .find_map(|hours| {
            tz.from_local_datetime(&(*naive - Duration::hours(hours)))
                .latest()
        })
        .map(|before| {
            let offset = before.offset().fix().local_minus_utc();
            naive.and_utc().timestamp() - i64::from(offset)
        })
}

impl fmt::Display for ActivityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityZone::Local => f.write_str("local"),
            ActivityZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl FromStr for ActivityZone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(ActivityZone::Local);
        }
        s.parse::<Tz>()
            .map(ActivityZone::Named)
            .map_err(|e| e.to_string())
    }
}

/// Parse the export's start time column ("YYYY-MM-DD HH:MM:SS").
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, START_TIME_FORMAT).map_err(|e| {
        ConvertError::parse("start time", value, format!("expected {START_TIME_FORMAT}: {e}"))
    })
}

/// Calendar date of a start time, "YYYY-MM-DD".
pub fn format_date(start: &NaiveDateTime) -> String {
    start.format("%Y-%m-%d").to_string()
}

/// Wall-clock time of a start time on a 12-hour clock, "hh:mm:ss AM".
pub fn format_clock_time(start: &NaiveDateTime) -> String {
    start.format("%I:%M:%S %p").to_string()
}

/// Convert an "HH:MM:SS" duration to total seconds.
pub fn parse_duration(value: Option<&str>) -> Result<Option<i64>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let parts = parse_clock_parts::<3>("duration", value)?;
    let [hours, minutes, seconds] = parts;
    Ok(Some(hours * 3600 + minutes * 60 + seconds))
}

/// Split a colon-separated clock string into exactly `N` integers.
pub(crate) fn parse_clock_parts<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<[i64; N]> {
    let tokens: Vec<&str> = value.split(':').collect();
    if tokens.len() != N {
        return Err(ConvertError::parse(
            field,
            value,
            format!("expected {N} colon-separated integers, got {}", tokens.len()),
        ));
    }

    let mut parts = [0i64; N];
    for (slot, token) in parts.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|e| ConvertError::parse(field, value, format!("{token:?}: {e}")))?;
    }
    Ok(parts)
}
