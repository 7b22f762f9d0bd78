//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reading a store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Store file is not a JSON array of candidate records.
    #[error("invalid store file: {0}")]
    Json(#[from] serde_json::Error),
    /// Two records normalize to the same identity number.
    #[error("duplicate identity number in store: {0}")]
    DuplicateIdentity(String),
}
