//! Identity record matching for idmatch.
//!
//! This crate provides:
//! - A longest-matching-block sequence similarity ratio
//! - A configurable match policy (name similarity threshold)
//! - The [`Matcher`], which compares an extracted identity against a
//!   candidate record and returns a [`Verdict`]
//!
//! Core invariants:
//! - Matching is pure and total: every input, including absent fields,
//!   yields a verdict
//! - An identity-number mismatch always dominates the status
//! - Date of birth is compared and reported but does not affect the status
//!
#![deny(missing_docs)]

/// Error types for core operations.
pub mod errors;
/// Matcher and verdict types.
pub mod matching;
/// Match policy constants and validation.
pub mod policy;
/// Sequence similarity ratio.
pub mod similarity;

pub use errors::CoreError;
pub use matching::{match_records, Field, FieldComparison, MatchStatus, Matcher, Verdict};
pub use policy::{MatchPolicy, DEFAULT_NAME_THRESHOLD};
pub use similarity::{similarity, MatchingBlock, SequenceMatcher};
