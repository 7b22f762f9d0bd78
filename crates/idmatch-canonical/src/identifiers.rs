use crate::normalize::normalize_identity_number;
use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Standard printed layout: `12345-1234567-1`, separators optional. ASCII digits only.
const STANDARD_LAYOUT: &str = r"^[0-9]{5}-?[0-9]{7}-?[0-9]$";

/// Digit count of a standard identity number.
pub const STANDARD_DIGITS: usize = 13;

fn standard_layout() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(STANDARD_LAYOUT).ok())
        .as_ref()
}

/// Digit-only identity number (pattern: `[0-9]*`).
///
/// Deserialization rejects anything but ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Normalizes any raw value without checking its layout.
    pub fn from_raw(raw: &str) -> Self {
        Self(normalize_identity_number(Some(raw)))
    }

    /// Parses an identity number printed in the standard layout.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        let ok = standard_layout().is_some_and(|re| re.is_match(trimmed));
        if !ok {
            return Err(ValidationError::PatternMismatch {
                field: "IdentityNumber",
                value: s,
            });
        }
        Ok(Self::from_raw(trimmed))
    }

    /// Returns true when the digits form a standard-length identity number.
    pub fn is_standard(&self) -> bool {
        self.0.len() == STANDARD_DIGITS && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Renders the digits in the printed `5-7-1` layout when standard.
    pub fn formatted(&self) -> Option<String> {
        if !self.is_standard() {
            return None;
        }
        let digits = self.0.as_str();
        Some(format!(
            "{}-{}-{}",
            digits.get(..5)?,
            digits.get(5..12)?,
            digits.get(12..)?
        ))
    }

    /// Returns true when no digits survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PatternMismatch {
                field: "IdentityNumber",
                value,
            });
        }
        Ok(Self(value))
    }
}

impl From<IdentityNumber> for String {
    fn from(id: IdentityNumber) -> Self {
        id.0
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
