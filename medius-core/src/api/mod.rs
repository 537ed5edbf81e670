//! Capabilities shared by every artifact family
//!
//! Families implement [`Artifact`]; run-time discovery sources implement
//! [`ArtifactsGatherer`]. The registry only ever talks to these traits.

mod artifact;
mod gatherer;
mod labels;

pub use artifact::{Artifact, ArtifactDetails, Metadata, UserData};
pub use gatherer::ArtifactsGatherer;
pub use labels::{
    default_labels, Labels, DEFAULT_INSTANCETYPE_LABEL, DEFAULT_PREFERENCE_LABEL,
};
