use idmatch_canonical::{normalize_identity_number, normalize_name, CandidateRecord, ExtractedIdentity};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

use crate::errors::CoreError;
use crate::policy::MatchPolicy;
use crate::similarity::similarity;

/// Compared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Identity number.
    Cnic,
    /// Full name.
    Name,
    /// Date of birth.
    Dob,
}

impl Field {
    /// Stable lowercase label used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Cnic => "cnic",
            Field::Name => "name",
            Field::Dob => "dob",
        }
    }
}

/// Verdict status. Closed set; callers must not infer a fourth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Identity number and name both match.
    Verified,
    /// Identity number matches, name does not.
    NameMismatch,
    /// Identity number does not match.
    CnicMismatch,
}

impl MatchStatus {
    /// Stable code, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Verified => "VERIFIED",
            MatchStatus::NameMismatch => "NAME_MISMATCH",
            MatchStatus::CnicMismatch => "CNIC_MISMATCH",
        }
    }
}

/// Per-field comparison result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldComparison {
    /// Whether the field matched.
    #[serde(rename = "match")]
    pub matched: bool,
    /// Compared extracted value (normalized where the field is normalized).
    pub extracted: Option<String>,
    /// Compared candidate value (normalized where the field is normalized).
    pub candidate: Option<String>,
    /// Similarity score for fuzzy fields; serialized to two decimals.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_rounded"
    )]
    pub score: Option<f64>,
}

fn serialize_rounded<S: Serializer>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match score {
        Some(s) => serializer.serialize_some(&round_to_hundredths(*s)),
        None => serializer.serialize_none(),
    }
}

/// Rounds the exact binary value to two decimals, ties to even.
fn round_to_hundredths(score: f64) -> f64 {
    format!("{:.2}", score).parse().unwrap_or(score)
}

/// Outcome of matching one extracted identity against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    overall_match: bool,
    status: MatchStatus,
    details: BTreeMap<Field, FieldComparison>,
}

impl Verdict {
    /// True only for [`MatchStatus::Verified`].
    pub fn overall_match(&self) -> bool {
        self.overall_match
    }

    /// Verdict status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Per-field results.
    pub fn details(&self) -> &BTreeMap<Field, FieldComparison> {
        &self.details
    }

    /// Result for one field.
    pub fn field(&self, field: Field) -> Option<&FieldComparison> {
        self.details.get(&field)
    }

    /// Name similarity score.
    pub fn name_score(&self) -> f64 {
        self.field(Field::Name)
            .and_then(|c| c.score)
            .unwrap_or(0.0)
    }
}

/// Compares extracted identities against candidate records.
///
/// Stateless apart from its policy; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    /// Creates a matcher with a validated policy.
    pub fn with_policy(policy: MatchPolicy) -> Result<Self, CoreError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Policy in effect.
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Compares `extracted` against `candidate`. Never fails.
    pub fn match_records(&self, extracted: &ExtractedIdentity, candidate: &CandidateRecord) -> Verdict {
        let mut details = BTreeMap::new();

        let ext_cnic = normalize_identity_number(extracted.identity_number.as_deref());
        let cand_cnic = normalize_identity_number(candidate.identity_number.as_deref());
        let cnic_match = ext_cnic == cand_cnic;
        details.insert(
            Field::Cnic,
            FieldComparison {
                matched: cnic_match,
                extracted: Some(ext_cnic),
                candidate: Some(cand_cnic),
                score: None,
            },
        );

        let ext_name = normalize_name(extracted.full_name.as_deref());
        let cand_name = normalize_name(candidate.full_name.as_deref());
        let name_score = similarity(&ext_name, &cand_name);
        let name_match = name_score >= self.policy.name_threshold;
        details.insert(
            Field::Name,
            FieldComparison {
                matched: name_match,
                extracted: Some(ext_name),
                candidate: Some(cand_name),
                score: Some(name_score),
            },
        );

        // Recorded only; the status ignores it.
        let dob_match = extracted.date_of_birth == candidate.date_of_birth;
        details.insert(
            Field::Dob,
            FieldComparison {
                matched: dob_match,
                extracted: extracted.date_of_birth.clone(),
                candidate: candidate.date_of_birth.clone(),
                score: None,
            },
        );

        let status = match (cnic_match, name_match) {
            (true, true) => MatchStatus::Verified,
            (true, false) => MatchStatus::NameMismatch,
            (false, _) => MatchStatus::CnicMismatch,
        };

        debug!(
            cnic_match,
            name_match,
            name_score,
            dob_match,
            status = status.as_str(),
            "matched identity against candidate"
        );

        Verdict {
            overall_match: status == MatchStatus::Verified,
            status,
            details,
        }
    }
}

/// Matches with the default policy.
pub fn match_records(extracted: &ExtractedIdentity, candidate: &CandidateRecord) -> Verdict {
    Matcher::default().match_records(extracted, candidate)
}
