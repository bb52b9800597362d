//! Error Types

use thiserror::Error;

/// Failures talking to the browser's local storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to encode task list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },
}
