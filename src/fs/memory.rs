//! In-memory [`FileSystem`] used by unit tests.
//!
//! A synthetic filesystem that mimics the simple behaviors the linker
//! depends on: lstat-style queries, sorted directory listings, and symlink
//! creation.  Pre-configure entries with the builder-style methods, then
//! hand a reference to the linker.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{FileSystem, Metadata};

#[derive(Debug, Clone)]
enum Entry {
    File,
    Dir,
    Symlink(PathBuf),
}

/// In-memory filesystem with interior mutability so that symlink creation
/// works through a shared reference, like the real thing.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: Mutex<BTreeMap<PathBuf, Entry>>,
}

impl MemoryFileSystem {
    /// Create an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regular file at `path`.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Entry::File);
        self
    }

    /// Register a directory at `path`.
    #[must_use]
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Entry::Dir);
        self
    }

    /// Register a symlink at `path` pointing to `target`.
    #[must_use]
    pub fn with_symlink(self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Entry::Symlink(target.into()));
        self
    }

    /// Return the symlink target recorded at `path`, if any.
    pub fn link_target(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let entries = self.lock();
        match entries.get(path.as_ref()) {
            Some(Entry::Symlink(t)) => Some(t.clone()),
            _ => None,
        }
    }

    /// Number of symlinks currently recorded.
    pub fn symlink_count(&self) -> usize {
        self.lock()
            .values()
            .filter(|e| matches!(e, Entry::Symlink(_)))
            .count()
    }

    fn insert(&self, path: PathBuf, entry: Entry) {
        self.lock().insert(path, entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    fn info(&self, path: &Path) -> io::Result<Metadata> {
        let entries = self.lock();
        Ok(match entries.get(path) {
            None => Metadata::missing(),
            Some(Entry::File) => Metadata {
                exists: true,
                is_dir: false,
                link_target: None,
                mode: Some(0o644),
            },
            Some(Entry::Dir) => Metadata {
                exists: true,
                is_dir: true,
                link_target: None,
                mode: Some(0o755),
            },
            Some(Entry::Symlink(target)) => Metadata {
                exists: true,
                is_dir: false,
                link_target: Some(target.clone()),
                mode: Some(0o777),
            },
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let entries = self.lock();
        match entries.get(path) {
            Some(Entry::Dir) => {}
            Some(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("{} is not a directory", path.display()),
                ));
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", path.display()),
                ));
            }
        }
        // Immediate children only; the map is ordered, so names come out sorted.
        let names = entries
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        let mut entries = self.lock();
        if entries.contains_key(link) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", link.display()),
            ));
        }
        entries.insert(link.to_path_buf(), Entry::Symlink(target.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn info_distinguishes_kinds() {
        let fs = MemoryFileSystem::new()
            .with_file("/src/bashrc")
            .with_dir("/src/config")
            .with_symlink("/home/.bashrc", "/src/bashrc");

        assert!(!fs.info(Path::new("/nope")).unwrap().exists);
        let file = fs.info(Path::new("/src/bashrc")).unwrap();
        assert!(file.exists && !file.is_dir && !file.is_symlink());
        assert_eq!(file.mode, Some(0o644));
        let dir = fs.info(Path::new("/src/config")).unwrap();
        assert!(dir.is_dir);
        let link = fs.info(Path::new("/home/.bashrc")).unwrap();
        assert_eq!(link.link_target.as_deref(), Some(Path::new("/src/bashrc")));
    }

    #[test]
    fn read_dir_lists_immediate_children_sorted() {
        let fs = MemoryFileSystem::new()
            .with_dir("/src")
            .with_file("/src/b")
            .with_file("/src/a")
            .with_dir("/src/c")
            .with_file("/src/c/nested");

        assert_eq!(fs.read_dir(Path::new("/src")).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn read_dir_on_file_fails() {
        let fs = MemoryFileSystem::new().with_file("/src/a");
        assert!(fs.read_dir(Path::new("/src/a")).is_err());
    }

    #[test]
    fn symlink_creation_and_conflict() {
        let fs = MemoryFileSystem::new().with_file("/src/a");
        fs.symlink(Path::new("/src/a"), Path::new("/dst/a")).unwrap();
        assert_eq!(fs.link_target("/dst/a"), Some(PathBuf::from("/src/a")));

        let err = fs
            .symlink(Path::new("/src/a"), Path::new("/dst/a"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
