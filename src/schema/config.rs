/// Generator configuration, loadable from RON.
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::sampler::ClusterSource;
use crate::schema::phonotactics::{PhonotacticRules, DEFAULT_STOPLIST};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Tunables for a generation session.
///
/// Every field has a default, so a RON file only needs the values it
/// overrides:
///
/// ```ron
/// GeneratorConfig(
///     max_attempts: 500,
///     cluster_source: Observed,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound on candidate words composed per `generate` call.
    pub max_attempts: u32,
    pub cluster_source: ClusterSource,
    /// Drop stoplist words before building the syllable-count distribution.
    pub use_stoplist: bool,
    pub stoplist: Vec<String>,
    pub rules: PhonotacticRules,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            cluster_source: ClusterSource::Vetted,
            use_stoplist: true,
            stoplist: DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect(),
            rules: PhonotacticRules::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no generation session can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.rules.vowels.is_empty() {
            return Err(ConfigError::Invalid("vowel inventory is empty".to_string()));
        }
        if self.rules.onsets.is_empty() || self.rules.codas.is_empty() {
            return Err(ConfigError::Invalid(
                "onset and coda inventories must not be empty".to_string(),
            ));
        }

        let lowercase = |s: &str| s.chars().all(|c| c.is_ascii_lowercase());
        if !lowercase(self.rules.vowels.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "vowels '{}' must be lowercase ASCII letters",
                self.rules.vowels
            )));
        }
        for (kind, clusters) in [("onset", &self.rules.onsets), ("coda", &self.rules.codas)] {
            if let Some(bad) = clusters.iter().find(|c| !lowercase(c.as_str())) {
                return Err(ConfigError::Invalid(format!(
                    "{} '{}' must be lowercase ASCII letters",
                    kind, bad
                )));
            }
        }

        for entry in self.rules.inert_blocklist_entries() {
            warn!("blocklist entry '{}' is not a two-letter boundary and never matches", entry);
        }
        Ok(())
    }

    /// Stoplist to apply, or an empty slice when disabled.
    pub fn active_stoplist(&self) -> &[String] {
        if self.use_stoplist {
            &self.stoplist
        } else {
            &[]
        }
    }
}
