//! Hand-maintained artifacts
//!
//! Keep at most one `use_for_docs` entry per family. Fedora is absent on
//! purpose: it is discovered from the upstream release feed.

use super::Entry;
use crate::api::{default_labels, ArtifactDetails, Metadata, UserData};
use crate::artifacts::centos::CentOS;
use crate::artifacts::centos_stream::CentOSStream;
use crate::artifacts::generic::Generic;
use crate::artifacts::rhcos::Rhcos;
use crate::artifacts::rhcos_prerelease::RhcosPrerelease;
use crate::artifacts::ubuntu::Ubuntu;

/// Fresh copy of the static table, in declaration order
pub fn static_registry() -> Vec<Entry> {
    vec![
        Entry::new(Rhcos::new("4.9", true, Some(default_labels("u1.small", "rhel.8")))),
        Entry::new(Rhcos::new("4.10", true, Some(default_labels("u1.small", "rhel.8")))),
        Entry::new(Rhcos::new("4.11", true, Some(default_labels("u1.small", "rhel.8")))),
        Entry::new(Rhcos::new("4.12", true, Some(default_labels("u1.small", "rhel.8"))))
            .use_for_docs(),
        Entry::new(Rhcos::new("latest", false, Some(default_labels("u1.small", "rhel.9")))),
        Entry::new(RhcosPrerelease::new(
            "latest-4.9",
            Some(default_labels("u1.small", "rhel.8")),
        )),
        Entry::new(RhcosPrerelease::new(
            "latest-4.10",
            Some(default_labels("u1.small", "rhel.8")),
        )),
        Entry::new(RhcosPrerelease::new(
            "latest-4.11",
            Some(default_labels("u1.small", "rhel.8")),
        )),
        Entry::new(RhcosPrerelease::new(
            "latest-4.12",
            Some(default_labels("u1.small", "rhel.8")),
        )),
        Entry::new(RhcosPrerelease::new(
            "latest-4.13",
            Some(default_labels("u1.small", "rhel.9")),
        )),
        Entry::new(RhcosPrerelease::new(
            "latest",
            Some(default_labels("u1.small", "rhel.9")),
        )),
        Entry::new(CentOS::new("8.4", None)),
        Entry::new(CentOS::new("7-2009", Some(default_labels("u1.small", "centos.7"))))
            .use_for_docs(),
        Entry::new(CentOSStream::new(
            "9",
            Some(UserData::new("cloud-user")),
            Some(default_labels("u1.small", "centos.stream9")),
        ))
        .use_for_docs(),
        Entry::new(CentOSStream::new(
            "8",
            Some(UserData::new("centos")),
            Some(default_labels("u1.small", "centos.stream8")),
        )),
        Entry::new(Ubuntu::new("22.04", Some(default_labels("u1.small", "ubuntu")))).use_for_docs(),
        Entry::new(Ubuntu::new("20.04", Some(default_labels("u1.small", "ubuntu")))),
        Entry::new(Ubuntu::new("18.04", Some(default_labels("u1.small", "ubuntu")))),
        // for testing only
        Entry::new(Generic::new(
            ArtifactDetails {
                download_url: "https://download.cirros-cloud.net/0.6.1/cirros-0.6.1-x86_64-disk.img"
                    .to_string(),
                sha256_sum: Some(
                    "cc704ab14342c1c8a8d91b66a7fc611d921c8b8f1aaf4695f9d6463d913fa8d1".to_string(),
                ),
            },
            Metadata {
                name: "cirros".to_string(),
                version: "6.1".to_string(),
                description: "CirrOS test image".to_string(),
                example_user_data: None,
                labels: Default::default(),
            },
        ))
        .skip_when_not_focused(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_static_table_size_and_order() {
        let registry = static_registry();
        assert_eq!(registry.len(), 19);
        assert_eq!(registry[0].describe(), "rhcos:4.9");
        assert_eq!(registry[18].describe(), "cirros:6.1");
    }

    #[test]
    fn test_describe_strings_are_unique() {
        let registry = static_registry();
        let keys: HashSet<String> = registry.iter().map(Entry::describe).collect();
        assert_eq!(keys.len(), registry.len());
    }

    #[test]
    fn test_one_docs_entry_per_family() {
        let mut docs: HashMap<String, usize> = HashMap::new();
        for entry in static_registry().iter().filter(|e| e.use_for_docs) {
            *docs.entry(entry.name().to_string()).or_default() += 1;
        }
        assert!(docs.values().all(|count| *count == 1), "{docs:?}");
        assert_eq!(docs.len(), 4);
    }

    #[test]
    fn test_only_cirros_skips_when_unfocused() {
        let skipped: Vec<String> = static_registry()
            .iter()
            .filter(|e| e.skip_when_not_focused)
            .map(Entry::describe)
            .collect();
        assert_eq!(skipped, vec!["cirros:6.1"]);
    }

    #[test]
    fn test_no_static_latest_tags() {
        assert!(static_registry().iter().all(|e| !e.use_for_latest));
    }

    #[test]
    fn test_centos_8_4_has_no_labels() {
        let registry = static_registry();
        let centos = registry
            .iter()
            .find(|e| e.describe() == "centos:8.4")
            .unwrap();
        assert!(centos.artifact.metadata().labels.is_empty());
    }
}
