//! Focus selection for a single build run
//!
//! A focus string is one of:
//! - empty: everything except entries marked skip-when-not-focused
//! - `<name>:*`: every version of one family
//! - anything else: the entry whose describe string matches exactly
//!
//! Strings that match nothing select nothing.

use std::fmt;

use super::Entry;

const WILDCARD: &str = "*";

/// Parsed form of a focus string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus<'a> {
    /// No focus given
    All,
    /// `<name>:*`
    Family(&'a str),
    /// Exact describe string
    Exact(&'a str),
}

impl<'a> Focus<'a> {
    pub fn parse(focus: &'a str) -> Self {
        if focus.is_empty() {
            return Focus::All;
        }

        let parts: Vec<&str> = focus.split(':').collect();
        match parts.as_slice() {
            [name, wildcard] if *wildcard == WILDCARD => Focus::Family(*name),
            _ => Focus::Exact(focus),
        }
    }

    /// Whether `entry` stays out of a run with this focus
    pub fn skips(&self, entry: &Entry) -> bool {
        match self {
            Focus::All => entry.skip_when_not_focused,
            Focus::Family(name) => *name != entry.artifact.metadata().name,
            Focus::Exact(describe) => *describe != entry.artifact.describe(),
        }
    }
}

impl fmt::Display for Focus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::All => write!(f, "all entries not marked skip-when-not-focused"),
            Focus::Family(name) => write!(f, "every version of '{name}'"),
            Focus::Exact(describe) => write!(f, "exactly '{describe}'"),
        }
    }
}

/// Decide whether `entry` is left out of a run focused on `focus`
pub fn should_skip(focus: &str, entry: &Entry) -> bool {
    Focus::parse(focus).skips(entry)
}

/// Entries of `registry` that run under `focus`, in registry order
pub fn select<'r>(registry: &'r [Entry], focus: &str) -> Vec<&'r Entry> {
    let focus = Focus::parse(focus);
    registry.iter().filter(|entry| !focus.skips(entry)).collect()
}
