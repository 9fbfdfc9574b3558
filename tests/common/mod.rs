// Shared helpers for integration tests.
//
// Provides a temporary source repository plus a destination directory pair
// so each test gets an isolated dotfiles tree and link area without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotlink::commands::Environment;
use dotlink::config::{document, Config};
use dotlink::parser::BaseDirs;

/// An isolated repository and destination area backed by temp dirs.
///
/// Both directories are deleted on drop via the underlying
/// [`tempfile::TempDir`] values.
pub struct TestContext {
    /// Source tree the configuration document lives in.
    pub repo: tempfile::TempDir,
    /// Holds the `config/` and `home/` destination directories.
    pub dest: tempfile::TempDir,
}

impl TestContext {
    /// Create a context with empty repo, config, and home directories.
    pub fn new() -> Self {
        let repo = tempfile::tempdir().expect("create repo dir");
        let dest = tempfile::tempdir().expect("create dest dir");
        std::fs::create_dir(dest.path().join("config")).expect("create config dir");
        std::fs::create_dir(dest.path().join("home")).expect("create home dir");
        Self { repo, dest }
    }

    /// The environment commands run against.
    pub fn environment(&self) -> Environment {
        Environment::at(
            self.repo.path(),
            BaseDirs {
                user: self.config_dir(),
                home: self.home_dir(),
            },
        )
    }

    /// Path to the repository root.
    pub fn repo_path(&self) -> &Path {
        self.repo.path()
    }

    /// Destination directory links resolve under by default.
    pub fn config_dir(&self) -> PathBuf {
        self.dest.path().join("config")
    }

    /// Destination directory `useHome` links resolve under.
    pub fn home_dir(&self) -> PathBuf {
        self.dest.path().join("home")
    }

    /// Create an empty file at `path` inside the repository.
    pub fn source_file(&self, path: &str) -> &Self {
        let full = self.repo.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create source parent");
        }
        std::fs::write(&full, "").expect("write source file");
        self
    }

    /// Create a directory at `path` inside the repository.
    pub fn source_dir(&self, path: &str) -> &Self {
        std::fs::create_dir_all(self.repo.path().join(path)).expect("create source dir");
        self
    }

    /// Create a directory at `path` inside the default destination.
    pub fn dest_dir(&self, path: &str) -> &Self {
        std::fs::create_dir_all(self.config_dir().join(path)).expect("create dest dir");
        self
    }

    /// Create an empty file at `path` inside the default destination.
    pub fn dest_file(&self, path: &str) -> &Self {
        std::fs::write(self.config_dir().join(path), "").expect("write dest file");
        self
    }

    /// Create a symlink at `path` inside the default destination.
    #[cfg(unix)]
    pub fn dest_symlink(&self, path: &str, target: impl AsRef<Path>) -> &Self {
        std::os::unix::fs::symlink(target, self.config_dir().join(path))
            .expect("create dest symlink");
        self
    }

    /// Write `config` as the repository's document.
    pub fn write_config(&self, config: &Config) -> &Self {
        document::save(&self.environment().config_path, config).expect("write document");
        self
    }

    /// Read the repository's document back.
    pub fn read_config(&self) -> Config {
        document::load(&self.environment().config_path).expect("read document")
    }

    /// Where the symlink for a default-destination target lands.
    pub fn link_path(&self, name: &str) -> PathBuf {
        self.config_dir().join(name)
    }
}

/// A document with the given top-level targets and no options.
pub fn config_with_targets(targets: &[&str]) -> Config {
    Config {
        targets: targets.iter().map(ToString::to_string).collect(),
        ..Config::default()
    }
}
