//! Fedora release feed records and selection

use serde::Deserialize;
use std::collections::HashSet;

const CLOUD_VARIANT: &str = "Cloud";
const CLOUD_BASE_SUBVARIANT: &str = "Cloud_Base";
const QCOW2_SUFFIX: &str = ".qcow2";

/// One record of `releases.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub version: String,
    pub arch: String,
    pub link: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub subvariant: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

impl Release {
    /// Numeric release number; pre-releases ("40 Beta") have none
    fn number(&self) -> Option<u32> {
        self.version.parse().ok()
    }

    fn is_cloud_base_qcow2(&self, arch: &str) -> bool {
        self.arch == arch
            && self.variant == CLOUD_VARIANT
            && self.subvariant == CLOUD_BASE_SUBVARIANT
            && self.link.ends_with(QCOW2_SUFFIX)
    }
}

/// Parse the feed body
pub fn parse_feed(body: &str) -> Result<Vec<Release>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Pick the Cloud Base qcow2 images of stable releases for `arch`
///
/// Result is newest first with one record per release. A `max` of zero
/// keeps every release.
pub fn select_releases(releases: Vec<Release>, arch: &str, max: usize) -> Vec<Release> {
    let mut seen = HashSet::new();
    let mut selected: Vec<(u32, Release)> = releases
        .into_iter()
        .filter(|release| release.is_cloud_base_qcow2(arch))
        .filter_map(|release| release.number().map(|number| (number, release)))
        .filter(|(number, _)| seen.insert(*number))
        .collect();

    selected.sort_by(|(a, _), (b, _)| b.cmp(a));

    if max > 0 {
        selected.truncate(max);
    }

    selected.into_iter().map(|(_, release)| release).collect()
}
