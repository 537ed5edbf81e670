//! Ubuntu server cloud images

use crate::api::{Artifact, ArtifactDetails, Labels, Metadata, UserData};

pub const NAME: &str = "ubuntu";

const DESCRIPTION: &str = "Ubuntu server cloud image";
const DEFAULT_USER: &str = "ubuntu";
const RELEASES_URL: &str = "https://cloud-images.ubuntu.com/releases";

#[derive(Debug, Clone)]
pub struct Ubuntu {
    metadata: Metadata,
}

impl Ubuntu {
    /// `version` is the LTS release number, e.g. "22.04"
    pub fn new(version: &str, labels: Option<Labels>) -> Self {
        Self {
            metadata: super::family_metadata(
                NAME,
                version,
                DESCRIPTION,
                Some(UserData::new(DEFAULT_USER)),
                labels,
            ),
        }
    }
}

impl Artifact for Ubuntu {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn details(&self) -> Option<ArtifactDetails> {
        let version = &self.metadata.version;
        Some(ArtifactDetails {
            download_url: format!(
                "{RELEASES_URL}/{version}/release/ubuntu-{version}-server-cloudimg-amd64.img"
            ),
            sha256_sum: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url() {
        let ubuntu = Ubuntu::new("22.04", None);
        assert_eq!(
            ubuntu.details().unwrap().download_url,
            "https://cloud-images.ubuntu.com/releases/22.04/release/ubuntu-22.04-server-cloudimg-amd64.img"
        );
        assert!(ubuntu.metadata().labels.is_empty());
    }
}
