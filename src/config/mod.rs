//! Configuration model: a nested, override-able tree of link targets.
pub mod document;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Default name of the configuration document, looked up in the source tree.
pub const DEFAULT_NAME: &str = "dotlink.toml";

/// Declarative configuration for a set of targets.
///
/// The document is recursive: every declared target may carry its own
/// `Config` inside [`options`](Self::options), overriding what it inherits
/// from its ancestors.  Unset fields are never serialized, and an
/// [`options`](Self::options) map is dropped entirely rather than written
/// out empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Base directory for links to this target and its descendants.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_dir: String,
    /// Rename for the final link path segment.  `Some("")` suppresses the
    /// link altogether.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Declared target names, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
    /// Per-target overrides, keyed by declared name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, Config>>,
    /// Drop this target's own directory from the link path.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub flatten: bool,
    /// Link into the home directory instead of the user config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_home: Option<bool>,
    /// Labels gating inclusion of this target.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// How [`Config::set`] merges an override into an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    /// Preserve the existing `targets` list; take every other field from
    /// the override.  Used when editing per-target settings.
    Config,
    /// Preserve every existing field except `targets`, which is replaced by
    /// the override's.  Used when re-scanning a directory.
    Scan,
}

impl Config {
    /// Returns `true` when the config carries no information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_dir.is_empty()
            && self.link.is_none()
            && self.targets.is_empty()
            && self.options.as_ref().is_none_or(BTreeMap::is_empty)
            && !self.flatten
            && self.use_home.is_none()
            && self.tags.is_empty()
    }

    /// Look up the override config for a declared target name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Self> {
        self.options.as_ref().and_then(|m| m.get(name))
    }

    /// Merge `other` into the entry at `path` according to `mode`.
    ///
    /// `path` is a `/`-separated sequence of target names.  Overrides only
    /// attach to already-declared targets: if any intermediate segment has
    /// no `options` entry, or the final segment is not listed in its
    /// parent's `targets`, the call is a silent no-op.  Ancestors are never
    /// auto-created.
    ///
    /// After merging, a structurally empty result is removed from the
    /// parent's `options` map, and an emptied map is dropped so it is never
    /// serialized.
    pub fn set(&mut self, path: &str, other: Self, mode: SetMode) {
        let mut segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut parent = self;
        for segment in segments {
            match parent
                .options
                .as_mut()
                .and_then(|opts| opts.get_mut(segment))
            {
                Some(child) => parent = child,
                None => return,
            }
        }
        if !parent.targets.iter().any(|t| t == last) {
            return;
        }

        let existing = parent
            .options
            .as_ref()
            .and_then(|opts| opts.get(last))
            .cloned()
            .unwrap_or_default();
        let merged = match mode {
            SetMode::Config => Self {
                targets: existing.targets,
                ..other
            },
            SetMode::Scan => Self {
                targets: other.targets,
                ..existing
            },
        };

        if merged.is_empty() {
            if let Some(opts) = parent.options.as_mut() {
                opts.remove(last);
                if opts.is_empty() {
                    parent.options = None;
                }
            }
        } else {
            parent
                .options
                .get_or_insert_with(BTreeMap::new)
                .insert(last.to_string(), merged);
        }
    }
}

/// Eligibility filter applied to raw directory entry names before they
/// become declared targets (`init` and `scan` commands).
#[derive(Debug, Clone, Default)]
pub struct TargetFilter {
    /// When non-empty, only these names are kept.
    pub include: BTreeSet<String>,
    /// Names always dropped.  Callers pre-seed this with the configuration
    /// document's own name.
    pub exclude: BTreeSet<String>,
    /// Keep names with a leading dot.
    pub include_hidden: bool,
}

impl TargetFilter {
    /// Return the eligible subset of `entries`, in input order.
    #[must_use]
    pub fn eligible(&self, entries: &[String]) -> Vec<String> {
        entries
            .iter()
            .filter(|name| !name.is_empty())
            .filter(|name| self.include_hidden || !name.starts_with('.'))
            .filter(|name| self.include.is_empty() || self.include.contains(*name))
            .filter(|name| !self.exclude.contains(*name))
            .cloned()
            .collect()
    }
}
