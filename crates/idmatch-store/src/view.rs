//! Lookup-then-match helper.

use idmatch_canonical::{normalize_identity_number, ExtractedIdentity};
use idmatch_core::{Matcher, Verdict};
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;
use crate::lookup::CandidateLookup;

/// Result of checking an extracted identity against a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A candidate was found and matched.
    Matched {
        /// Verdict for the found candidate.
        verdict: Verdict,
    },
    /// No candidate carries this identity number. Not a verdict status.
    NotFound {
        /// Normalized identity number that was looked up.
        identity_number: String,
    },
}

impl LookupOutcome {
    /// Verdict, when a candidate was found.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            LookupOutcome::Matched { verdict } => Some(verdict),
            LookupOutcome::NotFound { .. } => None,
        }
    }
}

/// Looks up the candidate for `extracted` and matches it.
///
/// An identity without any identity-number digits is `NotFound` without a
/// store query.
pub fn verify_against<L: CandidateLookup + ?Sized>(
    store: &L,
    matcher: &Matcher,
    extracted: &ExtractedIdentity,
) -> Result<LookupOutcome, StoreError> {
    let identity_number = normalize_identity_number(extracted.identity_number.as_deref());
    if identity_number.is_empty() {
        debug!("extracted identity has no identity number; skipping lookup");
        return Ok(LookupOutcome::NotFound { identity_number });
    }

    match store.lookup(&identity_number)? {
        Some(candidate) => Ok(LookupOutcome::Matched {
            verdict: matcher.match_records(extracted, &candidate),
        }),
        None => {
            debug!(%identity_number, "no candidate for identity number");
            Ok(LookupOutcome::NotFound { identity_number })
        }
    }
}
