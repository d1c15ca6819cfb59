//! Storychar config — serde structs for ~/.storychar/config.json
//!
//! Pure types and parsing only. Flag merging lives in the CLI binary.

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint queried when the config and flags leave it unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.hybridimage.org/v1/characters/random";

/// Upper bound on the remote wait when not configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorycharConfig {
    pub api: ApiSection,
    pub offline: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    #[serde(rename = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
}

impl StorycharConfig {
    /// Load from a specific path. Missing or unparseable files yield the
    /// built-in defaults.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    /// Load from a specific path, surfacing read and parse failures.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Discover from ~/.storychar/config.json.
    pub fn discover() -> Self {
        Self::load(&Self::default_path())
    }

    /// Default path: ~/.storychar/config.json
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home).join(".storychar").join("config.json")
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn offline_forced(&self) -> bool {
        self.offline.unwrap_or(false)
    }
}
