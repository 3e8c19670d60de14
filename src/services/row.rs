// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line repair and row-to-record mapping.
//!
//! Each data line goes through:
//! 1. Quote stripping (quotes are dropped, not interpreted)
//! 2. Locale decimal repair (`,1,234,` → `,1.234,`)
//! 3. Splitting on commas
//! 4. Positional mapping to an [`ActivityRecord`]

use crate::error::{ConvertError, Result};
use crate::models::columns;
use crate::models::ActivityRecord;
use crate::services::fields::{coerce_number, normalize_sentinel, pace_to_speed};
use crate::time_utils::{self, ActivityZone};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Activity type written for running activities.
const RUN: &str = "Run";

fn grouped_decimal_re() -> &'static Regex {
    static GROUPED_DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
    GROUPED_DECIMAL_RE
        .get_or_init(|| Regex::new(r",(\d),(\d{3}),").expect("valid grouped decimal regex"))
}

/// Rewrite comma-grouped numbers (`,1,234,`) into decimals (`,1.234,`).
///
/// Matches are non-overlapping, left to right. Fields that happen to have the
/// same shape are rewritten too.
pub fn repair_locale_decimals(line: &str) -> Cow<'_, str> {
    grouped_decimal_re().replace_all(line, ",${1}.${2},")
}

/// Strip quotes, repair decimals, and split one export line into fields.
pub fn split_line(line: &str) -> Vec<String> {
    let unquoted = line.replace('"', "");
    repair_locale_decimals(&unquoted)
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Map one split data row to an activity record.
///
/// `line` is the 1-based line number in the source file, used for errors.
pub fn map_row(fields: &[String], line: usize, zone: ActivityZone) -> Result<ActivityRecord> {
    build_record(fields, zone).map_err(|e| e.at_line(line))
}

fn build_record(fields: &[String], zone: ActivityZone) -> Result<ActivityRecord> {
    if fields.len() < columns::MIN_FIELDS {
        return Err(ConvertError::parse(
            "row",
            &fields.join(","),
            format!(
                "expected at least {} columns, got {}",
                columns::MIN_FIELDS,
                fields.len()
            ),
        ));
    }

    let raw = |index: usize| fields.get(index).map(String::as_str);
    let field = |index: usize| normalize_sentinel(raw(index));

    let start = time_utils::parse_start_time(raw(columns::DATE).unwrap_or_default())?;
    let activity_type = raw(columns::ACTIVITY_TYPE).map(|label| {
        if label == columns::RUNNING_LABEL {
            RUN
        } else {
            label
        }
    });

    Ok(ActivityRecord {
        activity_description: field(columns::ACTIVITY_TYPE).map(str::to_string),
        activity_id: zone.timestamp(&start)?,
        activity_name: field(columns::TITLE).map(str::to_string),
        activity_type: normalize_sentinel(activity_type).map(str::to_string),
        average_cadence: coerce_number(field(columns::AVG_RUN_CADENCE)).map(|c| c.halved()),
        average_speed: pace_to_speed(field(columns::AVG_PACE))?,
        calories: coerce_number(field(columns::CALORIES)),
        date: time_utils::format_date(&start),
        distance: coerce_number(field(columns::DISTANCE)),
        elevation_gain: coerce_number(field(columns::TOTAL_ASCENT)),
        elevation_loss: coerce_number(field(columns::TOTAL_DESCENT)),
        max_heart_rate: coerce_number(field(columns::MAX_HEART_RATE)),
        max_speed: None,
        moving_time: time_utils::parse_duration(field(columns::DURATION))?,
        time: time_utils::format_clock_time(&start),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Numeric;

    const UTC: ActivityZone = ActivityZone::Named(chrono_tz::UTC);

    fn row(overrides: &[(usize, &str)]) -> Vec<String> {
        let mut fields = vec!["--".to_string(); 42];
        fields[columns::ACTIVITY_TYPE] = "Løping".to_string();
        fields[columns::DATE] = "2023-06-15 07:30:00".to_string();
        fields[2] = "false".to_string();
        fields[columns::TITLE] = "Oslo Løping".to_string();
        fields[columns::DISTANCE] = "5.02".to_string();
        fields[columns::CALORIES] = "450".to_string();
        fields[columns::DURATION] = "00:25:00".to_string();
        fields[columns::MAX_HEART_RATE] = "181".to_string();
        fields[columns::AVG_RUN_CADENCE] = "170".to_string();
        fields[columns::AVG_PACE] = "05:00".to_string();
        fields[columns::TOTAL_ASCENT] = "34".to_string();
        fields[columns::TOTAL_DESCENT] = "31".to_string();
        for (index, value) in overrides {
            fields[*index] = value.to_string();
        }
        fields
    }

    #[test]
    fn test_repair_locale_decimals() {
        assert_eq!(repair_locale_decimals("a,1,234,b"), "a,1.234,b");
        assert_eq!(repair_locale_decimals("x,10,0,123,y"), "x,10,0.123,y");
        assert_eq!(
            repair_locale_decimals("a,1,234,b,5,678,c"),
            "a,1.234,b,5.678,c"
        );
    }

    #[test]
    fn test_repair_leaves_other_lines_unchanged() {
        let line = "Løping,2023-06-15 07:30:00,false,Run,5.02,450";
        assert!(matches!(repair_locale_decimals(line), Cow::Borrowed(_)));
        assert_eq!(repair_locale_decimals("a,12,345,b"), "a,12,345,b");
        assert_eq!(repair_locale_decimals("a,1,2345,b"), "a,1,2345,b");
    }

    #[test]
    fn test_repair_is_non_overlapping() {
        // The trailing comma of the first match cannot start a second one
        assert_eq!(repair_locale_decimals(",1,234,5,678,"), ",1.234,5,678,");
    }

    #[test]
    fn test_split_line_strips_quotes_and_repairs() {
        let fields = split_line(r#""Løping","2023-06-15 07:30:00","1,234","x""#);
        assert_eq!(fields, vec!["Løping", "2023-06-15 07:30:00", "1.234", "x"]);
    }

    #[test]
    fn test_split_line_quoted_comma_is_still_a_separator() {
        let fields = split_line(r#""Morning, easy","x""#);
        assert_eq!(fields, vec!["Morning", " easy", "x"]);
    }

    #[test]
    fn test_map_row_full() {
        let record = map_row(&row(&[]), 2, UTC).unwrap();
        assert_eq!(record.activity_description.as_deref(), Some("Løping"));
        assert_eq!(record.activity_id, 1_686_814_200);
        assert_eq!(record.activity_name.as_deref(), Some("Oslo Løping"));
        assert_eq!(record.activity_type.as_deref(), Some("Run"));
        assert_eq!(record.average_cadence, Some(Numeric::Float(85.0)));
        assert_eq!(record.average_speed, Some(1000.0 / 300.0));
        assert_eq!(record.calories, Some(Numeric::Integer(450)));
        assert_eq!(record.date, "2023-06-15");
        assert_eq!(record.distance, Some(Numeric::Float(5.02)));
        assert_eq!(record.elevation_gain, Some(Numeric::Integer(34)));
        assert_eq!(record.elevation_loss, Some(Numeric::Integer(31)));
        assert_eq!(record.max_heart_rate, Some(Numeric::Integer(181)));
        assert_eq!(record.max_speed, None);
        assert_eq!(record.moving_time, Some(1500));
        assert_eq!(record.time, "07:30:00 AM");
    }

    #[test]
    fn test_map_row_sentinels_become_null() {
        let fields = row(&[
            (columns::AVG_RUN_CADENCE, "0"),
            (columns::AVG_PACE, "--"),
            (columns::DURATION, "--"),
            (columns::TITLE, "0"),
            (columns::MAX_HEART_RATE, "--"),
        ]);
        let record = map_row(&fields, 2, UTC).unwrap();
        assert_eq!(record.average_cadence, None);
        assert_eq!(record.average_speed, None);
        assert_eq!(record.moving_time, None);
        assert_eq!(record.activity_name, None);
        assert_eq!(record.max_heart_rate, None);
    }

    #[test]
    fn test_map_row_other_activity_types_pass_through() {
        let record = map_row(&row(&[(columns::ACTIVITY_TYPE, "Sykling")]), 2, UTC).unwrap();
        assert_eq!(record.activity_type.as_deref(), Some("Sykling"));
        assert_eq!(record.activity_description.as_deref(), Some("Sykling"));
    }

    #[test]
    fn test_map_row_unparseable_metric_is_null() {
        let record = map_row(&row(&[(columns::CALORIES, "mange")]), 2, UTC).unwrap();
        assert_eq!(record.calories, None);
    }

    #[test]
    fn test_map_row_bad_date_reports_line() {
        let err = map_row(&row(&[(columns::DATE, "15.06.2023")]), 7, UTC).unwrap_err();
        match err {
            ConvertError::Parse { line, field, .. } => {
                assert_eq!(line, 7);
                assert_eq!(field, "start time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_map_row_bad_duration_and_pace_fail() {
        assert!(map_row(&row(&[(columns::DURATION, "25 min")]), 2, UTC).is_err());
        assert!(map_row(&row(&[(columns::AVG_PACE, "5")]), 2, UTC).is_err());
        assert!(map_row(&row(&[(columns::AVG_PACE, "00:00")]), 2, UTC).is_err());
    }

    #[test]
    fn test_map_row_accepts_row_ending_at_last_consumed_column() {
        let fields: Vec<String> = row(&[]).into_iter().take(columns::MIN_FIELDS).collect();
        let record = map_row(&fields, 2, UTC).unwrap();
        assert_eq!(record.elevation_loss, Some(Numeric::Integer(31)));
    }

    #[test]
    fn test_map_row_short_row_fails() {
        let fields: Vec<String> = row(&[]).into_iter().take(10).collect();
        let err = map_row(&fields, 3, UTC).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("Line 3"));
    }
}
