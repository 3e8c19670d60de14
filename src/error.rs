// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion error types.

use std::path::PathBuf;

/// Error raised while converting a Garmin export.
///
/// Parse failures on structural fields (datetime, duration, pace) abort the
/// whole conversion. Metric fields never produce errors; they degrade to null.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Line {line}: invalid {field} {value:?}: {reason}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Build a parse error that is not yet tied to a CSV line.
    ///
    /// The row mapper fills in the line number with [`ConvertError::at_line`].
    pub fn parse(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConvertError::Parse {
            line: 0,
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a 1-based CSV line number to a parse error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ConvertError::Parse {
                field,
                value,
                reason,
                ..
            } => ConvertError::Parse {
                line,
                field,
                value,
                reason,
            },
            other => other,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for malformed input, as opposed to filesystem or JSON failures.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConvertError::Parse { .. })
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
