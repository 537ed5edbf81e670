//! Registry assembly
//!
//! The registry is the ordered list of entries a build run iterates over.
//! It is rebuilt on every invocation from two sources:
//!
//! ```text
//! static table (hand maintained)        gatherers (run-time discovery)
//!            │                                    │
//!            └──────────► new_registry ◄──────────┘
//!                              │
//!                              ▼
//!                  Vec<Entry>  ──►  should_skip(focus, entry)
//! ```
//!
//! Order is significant: static entries keep table order, followed by each
//! gatherer's output in configuration order.

mod config;
mod focus;
mod static_table;

pub use config::{FedoraConfig, RegistryConfig, CONFIG_FILE_NAME, DEFAULT_FEDORA_RELEASES_URL};
pub use focus::{select, should_skip, Focus};
pub use static_table::static_registry;

use tracing::{debug, info, warn};

use crate::api::{Artifact, ArtifactsGatherer};
use crate::artifacts::fedora::FedoraGatherer;

/// One artifact plus the policy flags that govern how a run treats it
#[derive(Debug)]
pub struct Entry {
    pub artifact: Box<dyn Artifact>,

    /// Representative version of its family in generated documentation
    pub use_for_docs: bool,

    /// Tagged `latest` for its family
    pub use_for_latest: bool,

    /// Only built when explicitly focused
    pub skip_when_not_focused: bool,
}

impl Entry {
    /// Entry with every flag cleared
    pub fn new(artifact: impl Artifact + 'static) -> Self {
        Self::from_boxed(Box::new(artifact))
    }

    fn from_boxed(artifact: Box<dyn Artifact>) -> Self {
        Self {
            artifact,
            use_for_docs: false,
            use_for_latest: false,
            skip_when_not_focused: false,
        }
    }

    pub fn use_for_docs(mut self) -> Self {
        self.use_for_docs = true;
        self
    }

    pub fn use_for_latest(mut self) -> Self {
        self.use_for_latest = true;
        self
    }

    pub fn skip_when_not_focused(mut self) -> Self {
        self.skip_when_not_focused = true;
        self
    }

    /// Unique key of the wrapped artifact
    pub fn describe(&self) -> String {
        self.artifact.describe()
    }

    /// Family name of the wrapped artifact
    pub fn name(&self) -> &str {
        &self.artifact.metadata().name
    }
}

/// Gatherers enabled by `config`, in the order they are consulted
pub fn default_gatherers(config: &RegistryConfig) -> Vec<Box<dyn ArtifactsGatherer>> {
    let mut gatherers: Vec<Box<dyn ArtifactsGatherer>> = Vec::new();

    if config.fedora.enabled {
        gatherers.push(Box::new(FedoraGatherer::new(config.fedora.clone())));
    }

    gatherers
}

/// Append every gatherer's artifacts to `registry`
///
/// The first artifact of each batch becomes the docs and `latest` entry for
/// its family. A failing gatherer is logged and contributes nothing.
pub async fn gather_artifacts(registry: &mut Vec<Entry>, gatherers: &[Box<dyn ArtifactsGatherer>]) {
    for gatherer in gatherers {
        match gatherer.gather().await {
            Ok(artifacts) => {
                debug!(
                    "Gatherer '{}' discovered {} artifact(s)",
                    gatherer.name(),
                    artifacts.len()
                );
                registry.extend(artifacts.into_iter().enumerate().map(|(i, artifact)| {
                    let entry = Entry::from_boxed(artifact);
                    if i == 0 {
                        entry.use_for_docs().use_for_latest()
                    } else {
                        entry
                    }
                }));
            }
            Err(e) => {
                warn!(
                    gatherer = gatherer.name(),
                    url = e.url(),
                    error = %error_chain(&e),
                    "Failed to gather artifacts from '{}': {}",
                    gatherer.name(),
                    e
                );
                // Continue with other gatherers
            }
        }
    }
}

/// Render an error with every underlying cause, outermost first
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

/// Build a fresh registry from the static table and `gatherers`
///
/// Never fails: discovery errors only shrink the result.
pub async fn new_registry(gatherers: &[Box<dyn ArtifactsGatherer>]) -> Vec<Entry> {
    let mut registry = static_registry();
    let static_len = registry.len();

    gather_artifacts(&mut registry, gatherers).await;

    info!(
        "Registry assembled: {} static, {} discovered",
        static_len,
        registry.len() - static_len
    );
    registry
}
