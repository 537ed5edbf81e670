//! Artifact capability and its identifying metadata

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::Labels;

/// Example cloud-init user data documented for an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Login user baked into the image
    pub username: String,
}

impl UserData {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

/// Identifying metadata of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Family name (e.g., "ubuntu", "rhcos")
    pub name: String,

    /// Version string within the family
    pub version: String,

    /// Human readable description of the family
    #[serde(default)]
    pub description: String,

    /// User data shown in generated documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_user_data: Option<UserData>,

    /// Labels attached to the packaged image
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl Metadata {
    /// Unique key of the artifact, `name:version`
    pub fn describe(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

/// Where the disk image of an artifact comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDetails {
    pub download_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_sum: Option<String>,
}

/// Something the pipeline can build
///
/// Artifacts are immutable values created once by their family constructor.
/// Downloading, verification and packaging live outside this crate and only
/// see artifacts through this trait.
pub trait Artifact: Debug + Send + Sync {
    /// Identifying metadata
    fn metadata(&self) -> &Metadata;

    /// Stable unique key, conventionally `name:version`
    fn describe(&self) -> String {
        self.metadata().describe()
    }

    /// Download location when it is known without inspecting upstream
    fn details(&self) -> Option<ArtifactDetails> {
        None
    }
}
