//! Error types for the core domain

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON object found at index {index}: {record}")]
    InvalidRecord { index: usize, record: String },

    #[error("Record {index} has {actual} values, expected {expected}")]
    MalformedRecord {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown valence label: {0}")]
    UnknownValence(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
