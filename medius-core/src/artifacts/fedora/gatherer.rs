//! Fedora release feed gatherer

use async_trait::async_trait;
use tracing::debug;

use super::releases::{parse_feed, select_releases};
use super::{Fedora, NAME};
use crate::api::{Artifact, ArtifactsGatherer};
use crate::error::DiscoveryError;
use crate::registry::FedoraConfig;

/// Discovers Fedora Cloud Base images from `releases.json`
pub struct FedoraGatherer {
    config: FedoraConfig,
}

impl FedoraGatherer {
    pub fn new(config: FedoraConfig) -> Self {
        Self { config }
    }

    /// Turn a feed body into artifacts, newest release first
    pub fn artifacts_from_feed(
        &self,
        body: &str,
    ) -> Result<Vec<Box<dyn Artifact>>, DiscoveryError> {
        let releases = parse_feed(body).map_err(|source| DiscoveryError::Malformed {
            url: self.config.releases_url.clone(),
            source,
        })?;

        let selected = select_releases(releases, &self.config.arch, self.config.max_releases);
        debug!(
            "Selected {} Fedora release(s) for {}",
            selected.len(),
            self.config.arch
        );

        Ok(selected
            .iter()
            .map(|release| Box::new(Fedora::from(release)) as Box<dyn Artifact>)
            .collect())
    }

    #[cfg(feature = "fedora")]
    async fn fetch_feed(&self) -> Result<String, DiscoveryError> {
        let url = &self.config.releases_url;
        let transport = |source: reqwest::Error| DiscoveryError::Transport {
            url: url.clone(),
            source: Box::new(source),
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("medius/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .build()
            .map_err(transport)?;

        debug!("Fetching Fedora release feed from {}", url);
        let response = client.get(url).send().await.map_err(transport)?;

        if !response.status().is_success() {
            return Err(DiscoveryError::Status {
                url: url.clone(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }

    /// Stub for when the fedora feature is disabled
    #[cfg(not(feature = "fedora"))]
    async fn fetch_feed(&self) -> Result<String, DiscoveryError> {
        Err(DiscoveryError::Disabled { gatherer: NAME })
    }
}

#[async_trait]
impl ArtifactsGatherer for FedoraGatherer {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn gather(&self) -> Result<Vec<Box<dyn Artifact>>, DiscoveryError> {
        let body = self.fetch_feed().await?;
        self.artifacts_from_feed(&body)
    }
}
