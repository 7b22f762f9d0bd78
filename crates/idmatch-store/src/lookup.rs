use std::collections::HashMap;

use idmatch_canonical::{normalize_identity_number, CandidateRecord};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Source of candidate records.
pub trait CandidateLookup {
    /// Finds the record whose identity number normalizes to the same digits
    /// as `identity_number`.
    fn lookup(&self, identity_number: &str) -> Result<Option<CandidateRecord>, StoreError>;
}

/// Candidate records held in memory, indexed by normalized identity number.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateStore {
    records: HashMap<String, CandidateRecord>,
}

impl InMemoryCandidateStore {
    /// Indexes `records`.
    ///
    /// Records without identity-number digits are skipped; two records with
    /// the same digits are rejected.
    pub fn from_records(records: Vec<CandidateRecord>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            let key = normalize_identity_number(record.identity_number.as_deref());
            if key.is_empty() {
                warn!(position, "skipping candidate without an identity number");
                continue;
            }
            if index.contains_key(&key) {
                return Err(StoreError::DuplicateIdentity(key));
            }
            index.insert(key, record);
        }
        debug!(records = index.len(), "indexed candidate records");
        Ok(Self { records: index })
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CandidateLookup for InMemoryCandidateStore {
    fn lookup(&self, identity_number: &str) -> Result<Option<CandidateRecord>, StoreError> {
        let key = normalize_identity_number(Some(identity_number));
        Ok(self.records.get(&key).cloned())
    }
}
