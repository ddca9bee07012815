use std::path::PathBuf;

/// Errors that can occur while reading or patching a PQP library
#[derive(Debug, thiserror::Error)]
pub enum PqpError {
    /// SQLite error (connection, malformed SQL, constraint violation)
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database file does not exist
    #[error("PQP file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A histogram was requested over an empty distribution
    #[error("Cannot build histogram: no {0} found")]
    EmptyDistribution(&'static str),

    /// A histogram was requested with zero bins
    #[error("Histogram bin count must be at least 1")]
    InvalidBins,

    /// CSV/TSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
