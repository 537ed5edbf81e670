//! Artifact families
//!
//! Each family is a leaf value type implementing [`Artifact`]. They carry
//! just enough to identify, label and locate an image; fetching and
//! inspecting images is the packaging layer's job.
//!
//! [`Artifact`]: crate::api::Artifact

pub mod centos;
pub mod centos_stream;
pub mod fedora;
pub mod generic;
pub mod rhcos;
pub mod rhcos_prerelease;
pub mod ubuntu;

use crate::api::{Labels, Metadata, UserData};

/// Metadata for a family member, defaulting absent labels to none
fn family_metadata(
    name: &str,
    version: &str,
    description: &str,
    example_user_data: Option<UserData>,
    labels: Option<Labels>,
) -> Metadata {
    Metadata {
        name: name.to_string(),
        version: version.to_string(),
        description: description.to_string(),
        example_user_data,
        labels: labels.unwrap_or_default(),
    }
}
