use std::fs;
use std::path::Path;

use idmatch_canonical::CandidateRecord;
use tracing::info;

use crate::error::StoreError;
use crate::lookup::{CandidateLookup, InMemoryCandidateStore};

/// Candidate store loaded from a JSON array file.
///
/// ```json
/// [{"cnic": "12345-1234567-1", "name": "Ali Khan", "dob": "1990-01-01"}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonCandidateStore {
    inner: InMemoryCandidateStore,
}

impl JsonCandidateStore {
    /// Reads and indexes the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;
        info!(path = %path.display(), records = store.len(), "loaded candidate store");
        Ok(store)
    }

    /// Indexes records from a JSON array string.
    pub fn from_json(contents: &str) -> Result<Self, StoreError> {
        let records: Vec<CandidateRecord> = serde_json::from_str(contents)?;
        Ok(Self {
            inner: InMemoryCandidateStore::from_records(records)?,
        })
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl CandidateLookup for JsonCandidateStore {
    fn lookup(&self, identity_number: &str) -> Result<Option<CandidateRecord>, StoreError> {
        self.inner.lookup(identity_number)
    }
}
