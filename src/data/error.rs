use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal load failures: nothing is returned when one of these occurs
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file is missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row that could not be parsed
///
/// `row` is the 1-based data row number; the header line is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("row {row}: invalid {column} '{value}' ({reason})")]
pub struct RowParseError {
    pub row: usize,
    pub column: &'static str,
    pub value: String,
    pub reason: String,
}

/// Problems with the rc file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration line {line}: '{content}' (expected key=value)")]
    InvalidLine { line: usize, content: String },

    #[error("Invalid color for '{key}' on line {line}: '{value}' (expected #RRGGBB)")]
    InvalidColor { line: usize, key: String, value: String },
}
