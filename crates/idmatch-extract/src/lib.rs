//! Extraction boundary for idmatch.
//!
//! This crate provides:
//! - OCR block types and line assembly
//! - The structured-extraction prompt and model request/response bodies
//! - Markdown code-fence stripping for model output
//! - [`ExtractionPipeline`], which drives injected OCR and model clients and
//!   returns an explicit [`ExtractionOutcome`]
//!
//! No network client lives here: callers pass implementations of
//! [`TextDetector`] and [`ModelInvoker`] in at construction time.
//!
#![deny(missing_docs)]

/// Client traits for the OCR and model services.
pub mod client;
/// Extraction configuration.
pub mod config;
/// Error and failure types.
pub mod errors;
/// Code-fence stripping.
pub mod fence;
/// OCR block types.
pub mod ocr;
/// Extraction pipeline and outcome.
pub mod pipeline;
/// Prompt and model request/response bodies.
pub mod prompt;

pub use client::{ModelInvoker, TextDetector};
pub use config::ExtractionConfig;
pub use errors::{ParseFailure, ServiceError};
pub use fence::strip_code_fence;
pub use ocr::{assemble_lines, BlockType, TextBlock};
pub use pipeline::{parse_fields, ExtractionOutcome, ExtractionPipeline};
pub use prompt::{build_prompt, ModelRequest, ModelResponse};
