//! Test helpers shared across the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use medius_core::api::{Artifact, ArtifactDetails, ArtifactsGatherer, Metadata};
use medius_core::artifacts::generic::Generic;
use medius_core::DiscoveryError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Generic artifact with a made-up download location
pub fn artifact(name: &str, version: &str) -> Generic {
    Generic::new(
        ArtifactDetails {
            download_url: format!("https://images.example.com/{name}-{version}.qcow2"),
            sha256_sum: None,
        },
        Metadata {
            name: name.to_string(),
            version: version.to_string(),
            description: format!("{name} test image"),
            example_user_data: None,
            labels: Default::default(),
        },
    )
}

/// Gatherer returning a fixed list of versions of one family
pub struct FixedGatherer {
    pub family: String,
    pub versions: Vec<String>,
    pub calls: AtomicUsize,
}

impl FixedGatherer {
    pub fn new(family: &str, versions: &[&str]) -> Self {
        Self {
            family: family.to_string(),
            versions: versions.iter().map(|v| v.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ArtifactsGatherer for FixedGatherer {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn gather(&self) -> Result<Vec<Box<dyn Artifact>>, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .versions
            .iter()
            .map(|v| Box::new(artifact(&self.family, v)) as Box<dyn Artifact>)
            .collect())
    }
}

/// Gatherer that always fails like an unreachable feed
pub struct FailingGatherer {
    pub calls: AtomicUsize,
}

impl FailingGatherer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ArtifactsGatherer for FailingGatherer {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn gather(&self) -> Result<Vec<Box<dyn Artifact>>, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DiscoveryError::Status {
            url: "https://feed.example.com/releases.json".to_string(),
            status: 502,
        })
    }
}
