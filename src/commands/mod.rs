//! Subcommand implementations.
//!
//! Each command takes a resolved [`Environment`] and writes its output to
//! injected writers, so tests can drive commands without a child process.

pub mod check;
pub mod config;
pub mod init;
pub mod link;
pub mod scan;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::DEFAULT_NAME;
use crate::parser::BaseDirs;

/// Everything a command needs to know about where it runs.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Source tree root; targets are read relative to it.
    pub root: PathBuf,
    /// Configuration document path.
    pub config_path: PathBuf,
    /// Default base directories links resolve under.
    pub base_dirs: BaseDirs,
}

impl Environment {
    /// Resolve the environment from global CLI options.
    ///
    /// # Errors
    ///
    /// Fails when the current directory or the home directory cannot be
    /// determined.
    pub fn resolve(global: &GlobalOpts) -> Result<Self> {
        let root = match &global.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("could not determine current directory")?,
        };
        let config_path = global
            .config
            .clone()
            .unwrap_or_else(|| root.join(DEFAULT_NAME));
        let dirs = directories::BaseDirs::new()
            .context("could not determine the home directory")?;
        Ok(Self {
            root,
            config_path,
            base_dirs: BaseDirs {
                user: dirs.config_dir().to_path_buf(),
                home: dirs.home_dir().to_path_buf(),
            },
        })
    }

    /// Environment rooted at `root` with explicit base directories.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>, base_dirs: BaseDirs) -> Self {
        let root = root.into();
        let config_path = root.join(DEFAULT_NAME);
        Self {
            root,
            config_path,
            base_dirs,
        }
    }

    /// A parser for this environment, with substitution enabled.
    #[must_use]
    pub fn parser(&self) -> crate::parser::Parser {
        crate::parser::Parser::new(self.root.clone(), self.base_dirs.clone()).envsubst()
    }

    /// The name the configuration document carries, for filtering it out
    /// of scanned entries.
    pub(crate) fn config_file_name(&self) -> String {
        self.config_path
            .file_name()
            .map_or_else(|| DEFAULT_NAME.to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Absolute path of a slash-separated target path under the root.
pub(crate) fn target_dir(root: &Path, path: &str) -> PathBuf {
    path.split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}
