//! CentOS Stream generic cloud images
//!
//! Stream images are rebuilt continuously; the concrete image is resolved
//! when downloading, so no details are known up front.

use crate::api::{Artifact, Labels, Metadata, UserData};

pub const NAME: &str = "centos-stream";

const DESCRIPTION: &str = "CentOS Stream generic cloud image";
const DEFAULT_USER: &str = "cloud-user";

#[derive(Debug, Clone)]
pub struct CentOSStream {
    metadata: Metadata,
}

impl CentOSStream {
    /// Create a stream artifact
    ///
    /// `user_data` overrides the documented login user; streams changed their
    /// default user between major versions.
    pub fn new(version: &str, user_data: Option<UserData>, labels: Option<Labels>) -> Self {
        let user_data = user_data.unwrap_or_else(|| UserData::new(DEFAULT_USER));
        Self {
            metadata: super::family_metadata(
                NAME,
                version,
                DESCRIPTION,
                Some(user_data),
                labels,
            ),
        }
    }
}

impl Artifact for CentOSStream {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
