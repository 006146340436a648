use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by dataset loading.
///
/// Row numbers are 1-based and count the header line, so they match what an editor shows.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (I/O while reading, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input cannot be interpreted at all (e.g. unknown file extension).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A data line has fewer fields than the record needs.
    #[error("row {row} has {found} field(s), expected at least {expected} (raw='{raw}')")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
        raw: String,
    },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A data line is not valid UTF-8.
    #[error("row {row} is not valid UTF-8: {message} (raw='{raw}')")]
    Encoding {
        row: usize,
        raw: String,
        message: String,
    },
}

impl IngestionError {
    /// Row number the error refers to, if it is a row-level error.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::FieldCount { row, .. }
            | Self::ParseError { row, .. }
            | Self::Encoding { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Error writing the sales report sink.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for one run of the report tool.
#[derive(Debug, Error)]
pub enum AppError {
    /// A dataset could not be loaded. Always fatal.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: IngestionError,
    },

    /// Interactive input was missing or malformed.
    #[error("invalid input: {0}")]
    Input(String),

    /// Command-line usage error.
    #[error("{0}")]
    Usage(String),

    /// Console I/O failed.
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Load { .. } => 3,
            Self::Input(_) => 4,
            Self::Console(_) => 1,
        }
    }
}
