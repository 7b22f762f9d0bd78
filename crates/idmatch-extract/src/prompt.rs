use serde::{Deserialize, Serialize};

use crate::config::ExtractionConfig;

/// Keys the model is asked to return.
pub const FIELD_KEYS: &[&str] = &[
    "name",
    "father_name",
    "cnic_number",
    "dob",
    "gender",
    "issue_date",
    "expiry_date",
];

/// Builds the structured-extraction instruction for OCR text.
pub fn build_prompt(raw_text: &str) -> String {
    let keys = FIELD_KEYS
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are a data extraction system.\n\
         The following text was read by OCR from a national identity card:\n\
         \n\
         <raw_text>\n\
         {raw_text}\
         </raw_text>\n\
         \n\
         Extract these details and return them as a single JSON object:\n\
         1. Name\n\
         2. Father name (or husband name)\n\
         3. Identity number, formatted 12345-1234567-1\n\
         4. Date of birth\n\
         5. Gender\n\
         6. Date of issue (YYYY-MM-DD when visible, otherwise as printed)\n\
         7. Date of expiry (YYYY-MM-DD when visible, otherwise as printed)\n\
         \n\
         JSON keys: {keys}.\n\
         Set any field that is not found to null.\n\
         Return only the JSON object, without markdown formatting.\n"
    )
}

/// One content part of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPart {
    /// Part type; always `"text"` for requests.
    #[serde(rename = "type")]
    pub kind: String,
    /// Text payload; absent for non-text parts.
    #[serde(default)]
    pub text: Option<String>,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker role.
    pub role: String,
    /// Content parts.
    pub content: Vec<ContentPart>,
}

/// Request body for one model invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRequest {
    /// Request schema version.
    pub anthropic_version: String,
    /// Generation cap.
    pub max_tokens: u32,
    /// Conversation; a single user turn here.
    pub messages: Vec<Message>,
}

impl ModelRequest {
    /// Single-turn request carrying `prompt`.
    pub fn new(config: &ExtractionConfig, prompt: String) -> Self {
        Self {
            anthropic_version: config.anthropic_version.clone(),
            max_tokens: config.max_tokens,
            messages: vec![Message {
                role: "user".into(),
                content: vec![ContentPart {
                    kind: "text".into(),
                    text: Some(prompt),
                }],
            }],
        }
    }
}

/// Response body of a model invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelResponse {
    /// Generated content parts.
    pub content: Vec<ContentPart>,
}

impl ModelResponse {
    /// Text of the first content part.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|part| part.text.as_deref())
    }
}
