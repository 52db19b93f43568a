//! Case configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{ManorError, ManorResult};
use crate::text::TextLimits;

/// Settings for judging an accusation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentConfig {
    /// Supporting clues needed for a successful accusation.
    #[serde(default = "default_support_threshold")]
    pub support_threshold: usize,

    /// Maximum entries in the collected-clue log.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_support_threshold() -> usize {
    2
}

fn default_log_capacity() -> usize {
    32
}

impl Default for JudgmentConfig {
    fn default() -> Self {
        Self {
            support_threshold: default_support_threshold(),
            log_capacity: default_log_capacity(),
        }
    }
}

/// Complete configuration for one case.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CaseConfig {
    #[serde(default)]
    pub limits: TextLimits,

    #[serde(default)]
    pub judgment: JudgmentConfig,
}

impl CaseConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> ManorResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ManorResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ManorError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "loaded case config");
        Ok(config)
    }
}
