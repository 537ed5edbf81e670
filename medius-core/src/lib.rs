//! Medius core library exports
//!
//! Artifact registry and discovery for the containerdisks build pipeline.

pub mod api;
pub mod artifacts;
pub mod error;
pub mod registry;

pub use error::DiscoveryError;
pub use registry::{new_registry, should_skip, Entry};
