use thiserror::Error;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Match policy is out of range.
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
}
