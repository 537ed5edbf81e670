//! Fedora Cloud Base images
//!
//! Fedora releases too often to maintain by hand, so its artifacts come from
//! [`FedoraGatherer`] reading the upstream release feed.

mod gatherer;
mod releases;

pub use gatherer::FedoraGatherer;
pub use releases::{parse_feed, select_releases, Release};

use crate::api::{default_labels, Artifact, ArtifactDetails, Metadata, UserData};

pub const NAME: &str = "fedora";

const DESCRIPTION: &str = "Fedora Cloud Base image";
const DEFAULT_USER: &str = "fedora";

#[derive(Debug, Clone)]
pub struct Fedora {
    metadata: Metadata,
    details: ArtifactDetails,
}

impl Fedora {
    pub fn new(version: &str, details: ArtifactDetails) -> Self {
        Self {
            metadata: super::family_metadata(
                NAME,
                version,
                DESCRIPTION,
                Some(UserData::new(DEFAULT_USER)),
                Some(default_labels("u1.small", "fedora")),
            ),
            details,
        }
    }
}

impl From<&Release> for Fedora {
    fn from(release: &Release) -> Self {
        Fedora::new(
            &release.version,
            ArtifactDetails {
                download_url: release.link.clone(),
                sha256_sum: release.sha256.clone(),
            },
        )
    }
}

impl Artifact for Fedora {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn details(&self) -> Option<ArtifactDetails> {
        Some(self.details.clone())
    }
}
