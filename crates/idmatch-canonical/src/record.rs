use serde::{Deserialize, Serialize};

/// Fields produced by the extraction pipeline for one scanned document.
///
/// Serde keys follow the extraction model's output (`cnic_number`, `name`,
/// `dob`, ...). Long field names are accepted as aliases. A missing key and
/// an explicit `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIdentity {
    /// Identity number as read from the document, separators included.
    #[serde(rename = "cnic_number", alias = "identity_number", default)]
    pub identity_number: Option<String>,
    /// Holder's full name.
    #[serde(rename = "name", alias = "full_name", default)]
    pub full_name: Option<String>,
    /// Date of birth, free text.
    #[serde(rename = "dob", alias = "date_of_birth", default)]
    pub date_of_birth: Option<String>,
    /// Father's (or husband's) name.
    #[serde(default)]
    pub father_name: Option<String>,
    /// Gender as printed.
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of issue.
    #[serde(default)]
    pub issue_date: Option<String>,
    /// Date of expiry.
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl ExtractedIdentity {
    /// Builds an identity from the three compared fields.
    pub fn new(
        identity_number: Option<&str>,
        full_name: Option<&str>,
        date_of_birth: Option<&str>,
    ) -> Self {
        Self {
            identity_number: identity_number.map(str::to_owned),
            full_name: full_name.map(str::to_owned),
            date_of_birth: date_of_birth.map(str::to_owned),
            ..Self::default()
        }
    }
}

/// Reference-store record that an extracted identity is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Identity number on file.
    #[serde(rename = "cnic", alias = "identity_number", default)]
    pub identity_number: Option<String>,
    /// Full name on file.
    #[serde(rename = "name", alias = "full_name", default)]
    pub full_name: Option<String>,
    /// Date of birth on file, free text.
    #[serde(rename = "dob", alias = "date_of_birth", default)]
    pub date_of_birth: Option<String>,
}

impl CandidateRecord {
    /// Builds a candidate record.
    pub fn new(
        identity_number: Option<&str>,
        full_name: Option<&str>,
        date_of_birth: Option<&str>,
    ) -> Self {
        Self {
            identity_number: identity_number.map(str::to_owned),
            full_name: full_name.map(str::to_owned),
            date_of_birth: date_of_birth.map(str::to_owned),
        }
    }
}
