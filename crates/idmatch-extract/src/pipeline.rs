use idmatch_canonical::ExtractedIdentity;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::client::{ModelInvoker, TextDetector};
use crate::config::ExtractionConfig;
use crate::errors::{ParseFailure, ServiceError};
use crate::fence::strip_code_fence;
use crate::ocr::assemble_lines;
use crate::prompt::{build_prompt, ModelRequest, ModelResponse};

/// Result of running extraction on one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Fields were extracted.
    Extracted(ExtractedIdentity),
    /// OCR found no text in the image.
    NoText,
    /// The model answered but its output was not a valid field map.
    Unparsable(ParseFailure),
}

impl ExtractionOutcome {
    /// Extracted fields, if any.
    pub fn fields(&self) -> Option<&ExtractedIdentity> {
        match self {
            ExtractionOutcome::Extracted(fields) => Some(fields),
            _ => None,
        }
    }

    /// Error object for callers that report failures as data, `None` on success.
    pub fn error_object(&self) -> Option<Value> {
        match self {
            ExtractionOutcome::Extracted(_) => None,
            ExtractionOutcome::NoText => Some(json!({
                "error": "Text detection failed to extract any text from the image."
            })),
            ExtractionOutcome::Unparsable(failure) => Some(json!({
                "error": "Failed to parse extraction result",
                "raw_content": failure.raw_content,
            })),
        }
    }
}

/// Parses model output, with or without code fences, into extracted fields.
pub fn parse_fields(content: &str) -> Result<ExtractedIdentity, ParseFailure> {
    serde_json::from_str(strip_code_fence(content)).map_err(|err| ParseFailure {
        raw_content: content.to_string(),
        reason: err.to_string(),
    })
}

/// OCR → prompt → model → field map, over injected client handles.
pub struct ExtractionPipeline<D, M> {
    detector: D,
    invoker: M,
    config: ExtractionConfig,
}

impl<D: TextDetector, M: ModelInvoker> ExtractionPipeline<D, M> {
    /// Creates a pipeline over the given clients.
    pub fn new(detector: D, invoker: M, config: ExtractionConfig) -> Self {
        Self {
            detector,
            invoker,
            config,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts identity fields from a document image.
    ///
    /// Service failures are returned as errors; empty OCR output and
    /// unparsable model output are outcomes.
    pub fn extract(&self, image: &[u8]) -> Result<ExtractionOutcome, ServiceError> {
        info!(bytes = image.len(), "sending image to text detection");
        let blocks = self.detector.detect_text(image)?;
        let raw_text = assemble_lines(&blocks);
        info!(chars = raw_text.chars().count(), "text detection completed");

        if raw_text.trim().is_empty() {
            warn!("text detection returned no text");
            return Ok(ExtractionOutcome::NoText);
        }

        let request = ModelRequest::new(&self.config, build_prompt(&raw_text));
        let body = serde_json::to_vec(&request).map_err(|e| ServiceError::Encoding(e.to_string()))?;

        info!(
            model_id = %self.config.model_id,
            region = %self.config.region,
            "sending text to model"
        );
        let response_body = self.invoker.invoke(&self.config.model_id, &body)?;
        let response: ModelResponse = serde_json::from_slice(&response_body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
        let content = response
            .first_text()
            .ok_or_else(|| ServiceError::MalformedResponse("no text content".into()))?;
        debug!(content_chars = content.len(), "model responded");

        match parse_fields(content) {
            Ok(fields) => Ok(ExtractionOutcome::Extracted(fields)),
            Err(failure) => {
                warn!(reason = %failure.reason, raw_content = %failure.raw_content, "model output is not a field map");
                Ok(ExtractionOutcome::Unparsable(failure))
            }
        }
    }
}
