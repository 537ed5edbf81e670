//! Artifacts described entirely by their caller
//!
//! Used for test images such as cirros, where the download location and
//! checksum are pinned in the static table.

use crate::api::{Artifact, ArtifactDetails, Metadata};

#[derive(Debug, Clone)]
pub struct Generic {
    details: ArtifactDetails,
    metadata: Metadata,
}

impl Generic {
    pub fn new(details: ArtifactDetails, metadata: Metadata) -> Self {
        Self { details, metadata }
    }
}

impl Artifact for Generic {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn details(&self) -> Option<ArtifactDetails> {
        Some(self.details.clone())
    }
}
