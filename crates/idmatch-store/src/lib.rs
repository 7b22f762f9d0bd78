//! Candidate record lookup for idmatch.
//!
//! This crate provides:
//! - The [`CandidateLookup`] trait, keyed by normalized identity number
//! - In-memory and JSON-file backed stores
//! - [`verify_against`], which looks a candidate up and matches it, keeping
//!   "not found" distinct from every verdict status

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// JSON-file backed store.
pub mod json;
/// Lookup trait and in-memory store.
pub mod lookup;
/// Lookup-then-match helper.
pub mod view;

pub use error::StoreError;
pub use json::JsonCandidateStore;
pub use lookup::{CandidateLookup, InMemoryCandidateStore};
pub use view::{verify_against, LookupOutcome};
