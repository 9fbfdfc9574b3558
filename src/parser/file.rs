//! File metadata value type.

use std::path::PathBuf;

/// A file location as a base directory plus ordered path segments.
///
/// Keeping the segments separate from the base directory lets the parser
/// rename or drop individual segments (link rename, flatten) before the
/// full path is ever materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    /// Directory all segments are joined under.
    pub base_dir: PathBuf,
    /// Ordered path segments below the base directory.
    pub path: Vec<String>,
}

impl File {
    /// Build a file from a base directory and its path segments.
    pub fn new(base_dir: impl Into<PathBuf>, path: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            path,
        }
    }

    /// Join the base directory with every path segment.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        let mut full = self.base_dir.clone();
        for segment in &self.path {
            full.push(segment);
        }
        full
    }

    /// The directory containing the file: everything but the last segment.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        let mut dir = self.base_dir.clone();
        if let Some((_, rest)) = self.path.split_last() {
            for segment in rest {
                dir.push(segment);
            }
        }
        dir
    }

    /// The final path segment, when there is one.
    #[must_use]
    pub fn base_name(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Returns `true` when the file has no path segments at all.
    ///
    /// An unset link means the node is never symlinked itself.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.path.is_empty()
    }

    /// A copy of this file with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut path = self.path.clone();
        path.push(segment.to_string());
        Self {
            base_dir: self.base_dir.clone(),
            path,
        }
    }
}
