//! Red Hat Enterprise Linux CoreOS images from the OpenShift mirror

use crate::api::{Artifact, ArtifactDetails, Labels, Metadata, UserData};

pub const NAME: &str = "rhcos";

const DESCRIPTION: &str = "Red Hat Enterprise Linux CoreOS";
const DEFAULT_USER: &str = "core";
const MIRROR_URL: &str = "https://mirror.openshift.com/pub/openshift-v4/x86_64/dependencies/rhcos";
const IMAGE_FILE: &str = "rhcos-openstack.x86_64.qcow2.gz";

#[derive(Debug, Clone)]
pub struct Rhcos {
    metadata: Metadata,
    pinned: bool,
}

impl Rhcos {
    /// Create an RHCOS artifact
    ///
    /// `pinned` means `release` names an OpenShift minor stream ("4.12") whose
    /// newest build lives under `<release>/latest`. Rolling aliases such as
    /// "latest" are not pinned and map directly onto a mirror directory.
    pub fn new(release: &str, pinned: bool, labels: Option<Labels>) -> Self {
        Self {
            metadata: super::family_metadata(
                NAME,
                release,
                DESCRIPTION,
                Some(UserData::new(DEFAULT_USER)),
                labels,
            ),
            pinned,
        }
    }

    fn download_url(&self) -> String {
        let release = &self.metadata.version;
        if self.pinned {
            format!("{MIRROR_URL}/{release}/latest/{IMAGE_FILE}")
        } else {
            format!("{MIRROR_URL}/{release}/{IMAGE_FILE}")
        }
    }
}

impl Artifact for Rhcos {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn details(&self) -> Option<ArtifactDetails> {
        Some(ArtifactDetails {
            download_url: self.download_url(),
            sha256_sum: None,
        })
    }
}
