//! Run-time artifact discovery capability

use async_trait::async_trait;

use super::Artifact;
use crate::error::DiscoveryError;

/// A source of artifacts discovered at run time
///
/// The first artifact returned is the primary one for its family: the
/// registry marks it for docs and for the `latest` tag. Implementations
/// must not touch shared state; everything they learn goes into the return
/// value.
#[async_trait]
pub trait ArtifactsGatherer: Send + Sync {
    /// Gatherer identifier for logging
    fn name(&self) -> &'static str;

    /// Discover artifacts, primary first
    async fn gather(&self) -> Result<Vec<Box<dyn Artifact>>, DiscoveryError>;
}
