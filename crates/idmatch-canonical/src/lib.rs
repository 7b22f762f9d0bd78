//! Identity record data model and normalization rules for idmatch.
//!
//! Every value that participates in a comparison passes through this crate
//! first. Normalization is deterministic and idempotent, and an absent field
//! always normalizes to the empty string so it can never spuriously match a
//! present one.
//!
#![deny(missing_docs)]

/// Hygiene report types emitted during normalization.
pub mod hygiene;
/// Identity-number newtype and layout check.
pub mod identifiers;
/// Normalization rules for identity numbers and names.
pub mod normalize;
/// Extracted identity and candidate record types.
pub mod record;
/// Validation errors for canonical primitives.
pub mod validation;

pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use identifiers::IdentityNumber;
pub use normalize::{
    normalize_identity_number, normalize_name, normalize_with_report, NormalizedIdentity,
};
pub use record::{CandidateRecord, ExtractedIdentity};
pub use validation::ValidationError;
