//! Error types for ink-memory-core.

use thiserror::Error;

/// Result type alias using TrackerError.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors raised by the study tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by a key-value store or while encoding persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
