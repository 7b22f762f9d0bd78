use serde::{Deserialize, Serialize};

/// Default service region.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Default structured-extraction model.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";
/// Default request schema version sent with every model call.
pub const DEFAULT_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Policy constants for the extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Service region. The pipeline only logs it; callers read it when
    /// building their [`TextDetector`](crate::TextDetector) and
    /// [`ModelInvoker`](crate::ModelInvoker) handles.
    pub region: String,
    /// Model identifier passed on every invocation.
    pub model_id: String,
    /// Request schema version.
    pub anthropic_version: String,
    /// Maximum tokens the model may generate.
    pub max_tokens: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.into(),
            model_id: DEFAULT_MODEL_ID.into(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
