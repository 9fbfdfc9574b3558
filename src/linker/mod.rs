//! Resolution of a parsed tree against the filesystem, and symlink
//! creation for the nodes that are ready for it.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fs::FileSystem;
use crate::parser::{Node, Status, Tree};

/// A per-node resolution failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The target path is absent from the source tree.
    #[error("target does not exist: {}", path.display())]
    TargetMissing {
        /// Full target path.
        path: PathBuf,
    },
    /// The link path is a symlink pointing somewhere else.
    #[error("link already exists: {}", path.display())]
    LinkExists {
        /// Full link path.
        path: PathBuf,
    },
    /// The link path is occupied but the target is not a directory.
    #[error("target cannot be expanded: {}", path.display())]
    TargetNotExpandable {
        /// Full target path.
        path: PathBuf,
    },
    /// The target is a directory but the link path holds a non-directory.
    #[error("link cannot be expanded: {}", path.display())]
    LinkNotExpandable {
        /// Full link path.
        path: PathBuf,
    },
    /// A filesystem query failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Every conflicting node found during a tree resolution.
#[derive(Debug, Default)]
pub struct ConflictError {
    /// One entry per conflicting node, in walk order.
    pub errors: Vec<ResolveError>,
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "there is 1 conflict"),
            n => write!(f, "there are {n} conflicts"),
        }
    }
}

impl std::error::Error for ConflictError {}

/// Failure of a whole-tree operation.
#[derive(Debug, Error)]
pub enum LinkError {
    /// One or more nodes conflicted; nothing was created.
    #[error(transparent)]
    Conflicts(#[from] ConflictError),
    /// A filesystem operation failed; the walk was aborted.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Resolves nodes against a [`FileSystem`] and creates symlinks.
pub struct Linker<'a> {
    fs: &'a dyn FileSystem,
}

impl fmt::Debug for Linker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linker").finish_non_exhaustive()
    }
}

impl<'a> Linker<'a> {
    /// Create a linker over `fs`.
    #[must_use]
    pub const fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Resolve a single node, assigning its [`Status`].
    ///
    /// Conflicting outcomes both mark the node and return the matching
    /// [`ResolveError`]; callers aggregating over a tree keep walking.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Io`] when a filesystem query fails; the other
    /// variants mirror the node's conflict state.
    pub fn resolve(&self, node: &mut Node) -> Result<(), ResolveError> {
        let target_path = node.target.full_path();
        let target = self.fs.info(&target_path)?;
        if !target.exists {
            node.status = Status::Error;
            return Err(ResolveError::TargetMissing { path: target_path });
        }

        // Nodes with declared children only group their descendants, and
        // link-less nodes have nowhere to point from.
        if !node.children.is_empty() || node.link.is_unset() {
            node.status = Status::Skip;
            return Ok(());
        }

        let link_path = node.link.full_path();
        let link = self.fs.info(&link_path)?;
        if !link.exists {
            node.status = Status::Ready;
            return Ok(());
        }

        if let Some(existing) = link.link_target {
            if existing == target_path {
                node.status = Status::Done;
                return Ok(());
            }
            node.status = Status::Conflict;
            return Err(ResolveError::LinkExists { path: link_path });
        }

        // The link path is occupied by a real file or directory. When
        // both sides are directories the node expands into one child per
        // target entry; the outer walk resolves those in turn.
        if !target.is_dir {
            node.status = Status::Conflict;
            return Err(ResolveError::TargetNotExpandable { path: target_path });
        }
        if !link.is_dir {
            node.status = Status::Conflict;
            return Err(ResolveError::LinkNotExpandable { path: link_path });
        }

        let entries = self.fs.read_dir(&target_path)?;
        tracing::debug!(path = %target_path.display(), entries = entries.len(), "expanding directory");
        node.children = entries
            .into_iter()
            .map(|name| Node::new(node.target.child(&name), node.link.child(&name)))
            .collect();
        node.status = Status::Expand;
        Ok(())
    }

    /// Resolve every node in the tree, collecting conflicts.
    ///
    /// # Errors
    ///
    /// [`LinkError::Io`] aborts the walk on the first filesystem failure;
    /// otherwise all conflicts are gathered into [`LinkError::Conflicts`].
    pub fn resolve_tree(&self, tree: &mut Tree) -> Result<(), LinkError> {
        let mut conflicts = Vec::new();
        tree.walk_mut(&mut |node| match self.resolve(node) {
            Ok(()) => Ok(()),
            Err(ResolveError::Io(err)) => Err(LinkError::Io(err)),
            Err(err) => {
                conflicts.push(err);
                Ok(())
            }
        })?;
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(ConflictError { errors: conflicts }.into())
        }
    }

    /// Resolve the tree, creating a symlink for every `Ready` node.
    ///
    /// Conflicting nodes never stop the walk: every link that can be
    /// created is, and the conflicts come back as one aggregate so the
    /// caller can report them all.
    ///
    /// # Errors
    ///
    /// [`LinkError::Io`] aborts the walk on the first failed filesystem
    /// operation; otherwise [`LinkError::Conflicts`] carries every
    /// conflicting node's error.
    pub fn link(&self, tree: &mut Tree) -> Result<(), LinkError> {
        let mut conflicts = Vec::new();
        tree.walk_mut(&mut |node| {
            match self.resolve(node) {
                Ok(()) => {}
                Err(ResolveError::Io(err)) => return Err(LinkError::Io(err)),
                Err(err) => {
                    conflicts.push(err);
                    return Ok(());
                }
            }
            if node.status == Status::Ready {
                let target = node.target.full_path();
                let link = node.link.full_path();
                self.fs.symlink(&target, &link)?;
                tracing::info!(link = %link.display(), to = %target.display(), "created symlink");
                node.status = Status::Done;
            }
            Ok(())
        })?;
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(ConflictError { errors: conflicts }.into())
        }
    }
}
