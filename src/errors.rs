//! Error types for mapcount
//!
//! This module defines the error types used throughout the library.
//! Every failure is fatal: the pipeline is a one-shot batch computation
//! with no transient-failure-prone step except the initial read, so
//! nothing is retried and nothing is swallowed.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MapReduceError>;

/// Main error type for mapcount
#[derive(Error, Debug, Clone)]
pub enum MapReduceError {
    /// Input file could not be opened or read
    #[error("Input error for {path}: {message}")]
    Io { path: String, message: String },

    /// Partition count of zero; no legal partitioning exists
    #[error("Invalid partition count: {requested} (must be at least 1)")]
    InvalidPartitionCount { requested: usize },

    /// A result sink (report, CSV, chart) failed to write
    #[error("Sink error: {message}")]
    Sink { message: String },
}

impl MapReduceError {
    /// Create an input error for a path
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create an invalid partition count error
    pub fn invalid_partition_count(requested: usize) -> Self {
        Self::InvalidPartitionCount { requested }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Check if this error was caused by an illegal partition count
    pub fn is_invalid_partition_count(&self) -> bool {
        matches!(self, Self::InvalidPartitionCount { .. })
    }
}

impl From<csv::Error> for MapReduceError {
    fn from(err: csv::Error) -> Self {
        Self::sink(err.to_string())
    }
}
