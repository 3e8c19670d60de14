// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized activity record written to the JSON output.

use serde::{Deserialize, Serialize};

/// A metric value that keeps the integer/float distinction of its source.
///
/// `"450"` stays `450` in the output while `"5.02"` becomes `5.02`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    /// Half of the value. Always a float, even for even integers.
    pub fn halved(self) -> Self {
        Numeric::Float(self.as_f64() / 2.0)
    }
}

/// One converted activity.
///
/// Field order matches the serialized key order of the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Raw activity label from the export (e.g. "Løping")
    #[serde(rename = "Activity Description")]
    pub activity_description: Option<String>,
    /// Unix timestamp (seconds) of the activity start
    #[serde(rename = "Activity ID")]
    pub activity_id: i64,
    /// User-facing title
    #[serde(rename = "Activity Name")]
    pub activity_name: Option<String>,
    /// Activity label with "Løping" mapped to "Run"
    #[serde(rename = "Activity Type")]
    pub activity_type: Option<String>,
    /// Steps per minute per foot
    #[serde(rename = "Average Cadence")]
    pub average_cadence: Option<Numeric>,
    /// Meters per second, derived from the average pace
    #[serde(rename = "Average Speed")]
    pub average_speed: Option<f64>,
    #[serde(rename = "Calories")]
    pub calories: Option<Numeric>,
    /// Start date ("YYYY-MM-DD")
    #[serde(rename = "DateTime")]
    pub date: String,
    /// Kilometers
    #[serde(rename = "Distance")]
    pub distance: Option<Numeric>,
    #[serde(rename = "Elevation Gain")]
    pub elevation_gain: Option<Numeric>,
    #[serde(rename = "Elevation Loss")]
    pub elevation_loss: Option<Numeric>,
    #[serde(rename = "Max Heart Rate")]
    pub max_heart_rate: Option<Numeric>,
    /// The export carries no max speed; always null
    #[serde(rename = "Max Speed")]
    pub max_speed: Option<f64>,
    /// Seconds
    #[serde(rename = "Moving Time")]
    pub moving_time: Option<i64>,
    /// Start time ("hh:mm:ss AM")
    #[serde(rename = "Time")]
    pub time: String,
}

/// Every key of a serialized [`ActivityRecord`], in output order.
pub const RECORD_KEYS: [&str; 15] = [
    "Activity Description",
    "Activity ID",
    "Activity Name",
    "Activity Type",
    "Average Cadence",
    "Average Speed",
    "Calories",
    "DateTime",
    "Distance",
    "Elevation Gain",
    "Elevation Loss",
    "Max Heart Rate",
    "Max Speed",
    "Moving Time",
    "Time",
];
