//! Configuration file loading.

use idmatch_core::{CoreError, MatchPolicy, Matcher};
use idmatch_extract::ExtractionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "IDMATCH_CONFIG";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Configuration file is not valid TOML for [`Settings`].
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Values are out of range.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Effective settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Match policy.
    pub matching: MatchPolicy,
    /// Extraction policy constants.
    pub extraction: ExtractionConfig,
}

impl Settings {
    /// Builds a matcher, applying a command-line threshold override.
    pub fn matcher(&self, threshold: Option<f64>) -> Result<Matcher, CoreError> {
        let mut policy = self.matching;
        if let Some(threshold) = threshold {
            policy.name_threshold = threshold;
        }
        Matcher::with_policy(policy)
    }
}

/// Loads settings from `explicit`, else from `$IDMATCH_CONFIG`, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let settings = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str::<Settings>(&contents)?
        }
        None => Settings::default(),
    };

    settings.matching.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.matching.name_threshold, 0.80);
        assert_eq!(settings.extraction.region, "us-east-1");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings: Settings = toml::from_str(
            "[matching]\nname_threshold = 0.9\n\n[extraction]\nmax_tokens = 512\n",
        )
        .unwrap();
        assert_eq!(settings.matching.name_threshold, 0.9);
        assert_eq!(settings.extraction.max_tokens, 512);
        assert_eq!(
            settings.extraction.model_id,
            "anthropic.claude-3-sonnet-20240229-v1:0"
        );
    }

    #[test]
    fn unknown_threshold_type_is_rejected() {
        assert!(toml::from_str::<Settings>("[matching]\nname_threshold = \"high\"\n").is_err());
    }

    #[test]
    fn threshold_override_is_validated() {
        let settings = Settings::default();
        assert_eq!(settings.matcher(Some(0.5)).unwrap().policy().name_threshold, 0.5);
        assert!(settings.matcher(Some(2.0)).is_err());
    }
}
