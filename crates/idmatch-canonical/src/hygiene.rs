use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hygiene status for a normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HygieneStatus {
    /// The input was already in canonical form.
    Ok,
    /// Characters were stripped or folded; warnings should be inspected.
    Lossy,
    /// A compared field is absent or empty after normalization.
    Ambiguous,
}

/// Stable warning code emitted by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HygieneWarning(String);

impl HygieneWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Hygiene report produced while normalizing an extracted identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneReport {
    /// Overall hygiene status.
    pub status: HygieneStatus,
    /// Stable warning codes.
    pub warnings: Vec<HygieneWarning>,
    /// Counters such as stripped character totals.
    pub metrics: BTreeMap<String, u64>,
}

impl HygieneReport {
    /// Creates an empty report with status [`HygieneStatus::Ok`].
    pub fn new() -> Self {
        Self {
            status: HygieneStatus::Ok,
            warnings: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Returns true when a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code() == code)
    }

    pub(crate) fn warn(&mut self, code: &str) {
        self.warnings.push(HygieneWarning::new(code));
    }

    pub(crate) fn add_metric(&mut self, name: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        self.metrics
            .entry(name.to_string())
            .and_modify(|count| *count += amount)
            .or_insert(amount);
    }

    /// Raises the status; `Ambiguous` outranks `Lossy`, which outranks `Ok`.
    pub(crate) fn escalate(&mut self, status: HygieneStatus) {
        let rank = |s: HygieneStatus| match s {
            HygieneStatus::Ok => 0,
            HygieneStatus::Lossy => 1,
            HygieneStatus::Ambiguous => 2,
        };
        if rank(status) > rank(self.status) {
            self.status = status;
        }
    }
}

impl Default for HygieneReport {
    fn default() -> Self {
        Self::new()
    }
}
