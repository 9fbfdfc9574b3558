//! Tree nodes and their resolution status.

use std::fmt;

use super::file::File;

/// Outcome of resolving a node against the filesystem.
///
/// Every node receives exactly one assignment per resolution pass; the
/// value is terminal for that pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Not resolved yet.
    #[default]
    Undetermined,
    /// The link path is free; a symlink can be created.
    Ready,
    /// A symlink already points at the target.
    Done,
    /// Container or link-less node; nothing to do.
    Skip,
    /// Both sides are real directories; the node was expanded into children.
    Expand,
    /// The link destination is occupied by something incompatible.
    Conflict,
    /// The target itself is missing.
    Error,
}

impl Status {
    /// Whether the printer should render a tag for this status.
    ///
    /// `Skip` and `Expand` are uninteresting, and `Undetermined` only
    /// occurs before resolution.
    #[must_use]
    pub const fn is_tagged(self) -> bool {
        !matches!(self, Self::Undetermined | Self::Skip | Self::Expand)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Undetermined => "UNDETERMINED",
            Self::Ready => "READY",
            Self::Done => "DONE",
            Self::Skip => "SKIP",
            Self::Expand => "EXPAND",
            Self::Conflict => "CONFLICT",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// A node in the parsed tree: one target/link pair plus its children.
///
/// Nodes are created by the parser and grown (never pruned or mutated in
/// place) by the linker during directory expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// The source-tree file or directory to be linked.
    pub target: File,
    /// Where the symlink should live.
    pub link: File,
    /// Exclusively-owned children, in resolution order.
    pub children: Vec<Node>,
    /// Resolution outcome for the current pass.
    pub status: Status,
}

impl Node {
    /// Build an unresolved node for a target/link pair.
    #[must_use]
    pub fn new(target: File, link: File) -> Self {
        Self {
            target,
            link,
            children: Vec::new(),
            status: Status::Undetermined,
        }
    }

    /// The root node: empty target and link, holding the top-level targets.
    #[must_use]
    pub fn root(children: Vec<Self>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}
