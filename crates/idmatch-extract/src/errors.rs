use thiserror::Error;

/// Unrecoverable failure of an upstream service. Never turned into a verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Text detection service failed.
    #[error("text detection failed: {0}")]
    TextDetection(String),
    /// Model invocation failed.
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),
    /// Model responded with a body that is not a valid response envelope.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
    /// Request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encoding(String),
}

/// Model output that could not be read as structured fields.
///
/// Recoverable: the raw content is kept for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse extraction result: {reason}")]
pub struct ParseFailure {
    /// Text returned by the model, before fence stripping.
    pub raw_content: String,
    /// Parser message.
    pub reason: String,
}
