//! Error types for core module
//!
//! Provides error types for settings and save-game persistence.

use thiserror::Error;

/// Errors that can occur while reading or writing snapshots and settings
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// File I/O error
    #[error("Persistence I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Persistence serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot parsed but describes an impossible board
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },
}

/// Result type alias for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
