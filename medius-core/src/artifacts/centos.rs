//! CentOS Linux generic cloud images

use crate::api::{Artifact, Labels, Metadata, UserData};

pub const NAME: &str = "centos";

const DESCRIPTION: &str = "CentOS Linux generic cloud image";
const DEFAULT_USER: &str = "centos";

#[derive(Debug, Clone)]
pub struct CentOS {
    metadata: Metadata,
}

impl CentOS {
    /// `version` is the release as published, e.g. "8.4" or "7-2009"
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

impl Artifact for CentOS {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
