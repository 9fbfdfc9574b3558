//! Filesystem contract consumed by the linker.
//!
//! Provides the [`FileSystem`] trait so that the resolution core can be
//! unit-tested without touching the real filesystem.  Production code uses
//! [`SystemFileSystem`]; unit tests use the in-memory implementation in
//! `memory` (compiled for tests only).

#[cfg(test)]
pub mod memory;

use std::io;
use std::path::{Path, PathBuf};

/// Metadata for a single path, queried without following symlinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Whether the path exists at all (a broken symlink still exists).
    pub exists: bool,
    /// Whether the path is a real directory (not a symlink to one).
    pub is_dir: bool,
    /// The symlink target, when the path is a symlink.
    pub link_target: Option<PathBuf>,
    /// Unix permission bits, when the platform reports them.
    pub mode: Option<u32>,
}

impl Metadata {
    /// Metadata for a path that does not exist.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// Returns `true` if the path is a symbolic link.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        self.link_target.is_some()
    }
}

/// Abstraction over the filesystem queries and the single mutation the
/// resolution core needs.
///
/// Implement this trait to swap in a fake during unit tests, keeping the
/// linker independent of real I/O.  The production implementation is
/// [`SystemFileSystem`].
pub trait FileSystem {
    /// Query metadata for `path` without following symlinks.
    ///
    /// A missing path is not an error: it yields `Ok` with
    /// [`Metadata::exists`] set to `false`.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine I/O failures (permission denied,
    /// unreadable parent, ...).
    fn info(&self, path: &Path) -> io::Result<Metadata>;

    /// Return the entry names inside the directory at `path`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be opened or read as a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Create a symbolic link at `link` pointing to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` already exists or cannot be created.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;
}

/// Production [`FileSystem`] implementation that delegates to [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileSystem;

impl FileSystem for SystemFileSystem {
    fn info(&self, path: &Path) -> io::Result<Metadata> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Metadata::missing());
            }
            Err(e) => return Err(e),
        };
        let link_target = if meta.is_symlink() {
            Some(std::fs::read_link(path)?)
        } else {
            None
        };
        Ok(Metadata {
            exists: true,
            is_dir: meta.is_dir(),
            link_target,
            mode: permission_mode(&meta),
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        if std::fs::symlink_metadata(link).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", link.display()),
            ));
        }
        create_symlink(target, link)
    }
}

#[cfg(unix)]
fn permission_mode(meta: &std::fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt as _;
    Some(meta.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn permission_mode(_meta: &std::fs::Metadata) -> Option<u32> {
    None
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

/// On Windows, directory symlinks and file symlinks use distinct calls.
#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
