use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Minimum name similarity for a name match.
pub const DEFAULT_NAME_THRESHOLD: f64 = 0.80;

/// Tunable matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Name similarity at or above which names match, in `[0, 1]`.
    pub name_threshold: f64,
}

impl MatchPolicy {
    /// Rejects thresholds outside `[0, 1]` (including NaN).
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.name_threshold) {
            return Err(CoreError::InvalidPolicy(format!(
                "name_threshold {} is outside [0, 1]",
                self.name_threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            name_threshold: DEFAULT_NAME_THRESHOLD,
        }
    }
}
