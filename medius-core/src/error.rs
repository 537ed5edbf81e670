//! Discovery error types
//!
//! A gatherer failing is never fatal to the registry. These errors exist so
//! the assembly step can log a precise warning and move on.

use thiserror::Error;

/// Failure raised by an [`ArtifactsGatherer`](crate::api::ArtifactsGatherer)
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The request to the upstream feed could not be completed
    #[error("Failed to query release feed {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The upstream feed answered with a non-success status
    #[error("Release feed {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The upstream feed did not contain the expected document
    #[error("Malformed release feed from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The gatherer was compiled out of this build
    #[error("The '{gatherer}' gatherer is not enabled. Rebuild with --features {gatherer}")]
    Disabled { gatherer: &'static str },
}

impl DiscoveryError {
    /// URL of the upstream feed involved, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            DiscoveryError::Transport { url, .. }
            | DiscoveryError::Status { url, .. }
            | DiscoveryError::Malformed { url, .. } => Some(url),
            DiscoveryError::Disabled { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = DiscoveryError::Status {
            url: "https://example.com/releases.json".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Release feed https://example.com/releases.json returned HTTP 503"
        );
        assert_eq!(err.url(), Some("https://example.com/releases.json"));
    }

    #[test]
    fn test_malformed_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = DiscoveryError::Malformed {
            url: "https://example.com/releases.json".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_disabled_has_no_url() {
        let err = DiscoveryError::Disabled { gatherer: "fedora" };
        assert!(err.url().is_none());
        assert!(err.to_string().contains("--features fedora"));
    }
}
