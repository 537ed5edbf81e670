//! RHCOS pre-release builds published ahead of an OpenShift release

use crate::api::{Artifact, ArtifactDetails, Labels, Metadata, UserData};

pub const NAME: &str = "rhcos-prerelease";

const DESCRIPTION: &str = "Red Hat Enterprise Linux CoreOS pre-release";
const DEFAULT_USER: &str = "core";
const MIRROR_URL: &str =
    "https://mirror.openshift.com/pub/openshift-v4/x86_64/dependencies/rhcos/pre-release";
const IMAGE_FILE: &str = "rhcos-openstack.x86_64.qcow2.gz";

#[derive(Debug, Clone)]
pub struct RhcosPrerelease {
    metadata: Metadata,
}

impl RhcosPrerelease {
    /// `release` is a pre-release directory such as "latest-4.13" or "latest"
    pub fn new(release: &str, labels: Option<Labels>) -> Self {
        Self {
            metadata: super::family_metadata(
                NAME,
                release,
                DESCRIPTION,
                Some(UserData::new(DEFAULT_USER)),
                labels,
            ),
        }
    }
}

impl Artifact for RhcosPrerelease {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn details(&self) -> Option<ArtifactDetails> {
        Some(ArtifactDetails {
            download_url: format!("{MIRROR_URL}/{}/{IMAGE_FILE}", self.metadata.version),
            sha256_sum: None,
        })
    }
}
