//! Data loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading dashboard data
#[derive(Error, Debug)]
pub enum DataError {
    /// File could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON document did not match the dashboard data shape
    #[error("Invalid dashboard JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV file could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// CSV header has no column we can read stages or values from
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Result type alias for data loading
pub type DataResult<T> = Result<T, DataError>;
