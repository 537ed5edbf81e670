//! Registry configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. `--config <path>` passed on the command line
//! 2. `medius.yaml` in the platform config directory
//! 3. Built-in defaults
//!
//! ```yaml
//! fedora:
//!   enabled: true
//!   releasesUrl: https://fedoraproject.org/releases.json
//!   arch: x86_64
//!   maxReleases: 2
//!   timeoutSeconds: 30
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "medius.yaml";

/// Upstream Fedora release feed
pub const DEFAULT_FEDORA_RELEASES_URL: &str = "https://fedoraproject.org/releases.json";

/// Top-level registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Fedora release feed gatherer
    #[serde(default)]
    pub fedora: FedoraConfig,
}

/// Fedora gatherer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FedoraConfig {
    /// Whether the gatherer runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// URL of `releases.json`
    #[serde(default = "default_releases_url")]
    pub releases_url: String,

    /// Image architecture to select
    #[serde(default = "default_arch")]
    pub arch: String,

    /// Newest releases to keep (0 keeps all)
    #[serde(default = "default_max_releases")]
    pub max_releases: usize,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for FedoraConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            releases_url: default_releases_url(),
            arch: default_arch(),
            max_releases: default_max_releases(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_releases_url() -> String {
    DEFAULT_FEDORA_RELEASES_URL.to_string()
}

fn default_arch() -> String {
    "x86_64".to_string()
}

fn default_max_releases() -> usize {
    2
}

fn default_timeout() -> u64 {
    30
}

impl RegistryConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse registry config YAML")
    }

    /// Load configuration from a file that must exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse registry config: {}", path.display()))
    }

    /// Resolve configuration from an optional override, then the default location
    pub fn load(cli_override: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_override {
            debug!("Using --config override: {}", path.display());
            return Self::load_from_path(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading registry config from {}", path.display());
                Self::load_from_path(&path)
            }
            _ => {
                debug!("No registry config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Disable every gatherer
    pub fn offline(mut self) -> Self {
        self.fedora.enabled = false;
        self
    }

    /// Default config file path, if a config directory can be determined
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "kubevirt", "medius")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("medius")))
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
