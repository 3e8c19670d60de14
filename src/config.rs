//! Conversion configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use crate::time_utils::ActivityZone;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do with the converted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertMode {
    /// Replace the JSON file with the converted export
    #[default]
    Overwrite,
    /// Append the converted export to the records already in the JSON file
    Append,
}

impl FromStr for ConvertMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(ConvertMode::Overwrite),
            "append" => Ok(ConvertMode::Append),
            other => Err(format!("expected \"overwrite\" or \"append\", got {other:?}")),
        }
    }
}

/// Conversion configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Garmin Connect CSV export to read
    pub csv_path: PathBuf,
    /// JSON array to write (or append to)
    pub json_path: PathBuf,
    pub mode: ConvertMode,
    /// Zone the export's naive start times are recorded in
    pub zone: ActivityZone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            mode: ConvertMode::default(),
            zone: ActivityZone::default(),
        }
    }
}

const DEFAULT_CSV_PATH: &str = "garmin_activities.csv";
const DEFAULT_JSON_PATH: &str = "_activities.json";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mode = match lookup("CONVERT_MODE") {
            Some(value) => value
                .parse()
                .map_err(|reason| ConfigError::Invalid("CONVERT_MODE", reason))?,
            None => ConvertMode::default(),
        };

        let zone = match lookup("ACTIVITY_TIMEZONE") {
            Some(value) => value
                .parse()
                .map_err(|reason| ConfigError::Invalid("ACTIVITY_TIMEZONE", reason))?,
            None => ActivityZone::default(),
        };

        Ok(Self {
            csv_path: lookup("GARMIN_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH)),
            json_path: lookup("ACTIVITIES_JSON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_PATH)),
            mode,
            zone,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
