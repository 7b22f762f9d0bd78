use serde::{Deserialize, Serialize};

/// Kind of a detected text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    /// Whole page.
    Page,
    /// One line of text.
    Line,
    /// One word.
    Word,
    /// Anything else the service reports.
    #[serde(other)]
    Other,
}

/// Text block returned by the OCR service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block kind.
    #[serde(rename = "BlockType")]
    pub block_type: BlockType,
    /// Recognized text; absent for page blocks.
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
}

impl TextBlock {
    /// Creates a line block.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Line,
            text: Some(text.into()),
        }
    }
}

/// Joins the text of every line block, each followed by a newline.
pub fn assemble_lines(blocks: &[TextBlock]) -> String {
    let mut raw = String::new();
    for block in blocks.iter().filter(|b| b.block_type == BlockType::Line) {
        if let Some(text) = &block.text {
            raw.push_str(text);
            raw.push('\n');
        }
    }
    raw
}
