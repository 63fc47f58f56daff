use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::policy::{PolicyMode, SemverPolicy};

/// Environment variable holding the log filter for the CLI
pub const LOG_ENV: &str = "TAG_POLICY_LOG";

/// Log filter used when [`LOG_ENV`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Update policy configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Policy mode applied to candidate versions
    pub policy: PolicyMode,
    /// Only consider tags on the current pre-release channel when scanning
    pub match_pre_release: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy: PolicyMode::None,
            match_pre_release: true,
        }
    }
}

impl PolicyConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Returns the policy engine for the configured mode.
    pub fn engine(&self) -> SemverPolicy {
        SemverPolicy::new(self.policy)
    }
}
