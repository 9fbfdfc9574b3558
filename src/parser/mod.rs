//! Configuration parsing: resolving the nested override tree into a
//! concrete [`Tree`] of target/link pairs.

pub mod file;
pub mod node;
pub mod printer;
pub mod tree;

pub use file::File;
pub use node::{Node, Status};
pub use tree::Tree;

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;

/// Which default base directory a link resolves under when no explicit
/// base-dir override is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The user configuration directory.
    User,
    /// The home directory.
    Home,
}

/// The two mode base directories links default into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    /// Default for [`Mode::User`].
    pub user: PathBuf,
    /// Default for [`Mode::Home`].
    pub home: PathBuf,
}

impl BaseDirs {
    /// The directory for `mode`.
    #[must_use]
    pub fn dir(&self, mode: Mode) -> &Path {
        match mode {
            Mode::User => &self.user,
            Mode::Home => &self.home,
        }
    }
}

/// Errors that abort parsing; no partial tree is ever produced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Environment substitution referenced a variable that is not set.
    #[error("undefined environment variable ${name}")]
    UndefinedVariable {
        /// Name of the missing variable.
        name: String,
    },
}

/// Values a target inherits from its ancestors.
///
/// `base_dir` holds only an explicit override (empty when none), never a
/// resolved mode default — otherwise a descendant's own `use_home` could
/// never take effect.
#[derive(Debug, Clone)]
struct Inherited {
    base_dir: String,
    use_home: Option<bool>,
    flatten: bool,
}

/// Depth-first configuration parser.
///
/// Built with builder-style options, then applied to a [`Config`]:
///
/// ```
/// use dotlink::config::Config;
/// use dotlink::parser::{BaseDirs, Parser};
///
/// let parser = Parser::new(
///     "/src/dotfiles",
///     BaseDirs { user: "/home/me/.config".into(), home: "/home/me".into() },
/// );
/// let tree = parser.parse(&Config::default()).unwrap();
/// assert!(tree.root.children.is_empty());
/// ```
#[derive(Debug)]
pub struct Parser {
    cwd: PathBuf,
    base_dirs: BaseDirs,
    envsubst: bool,
    tags: BTreeSet<String>,
}

impl Parser {
    /// Create a parser rooted at the source tree `cwd`.
    pub fn new(cwd: impl Into<PathBuf>, base_dirs: BaseDirs) -> Self {
        Self {
            cwd: cwd.into(),
            base_dirs,
            envsubst: false,
            tags: BTreeSet::new(),
        }
    }

    /// Enable `$NAME`/`${NAME}` substitution in target names and base dirs.
    #[must_use]
    pub const fn envsubst(mut self) -> Self {
        self.envsubst = true;
        self
    }

    /// Tags that admit otherwise tag-excluded targets.
    #[must_use]
    pub fn tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Resolve `config` into a tree of target/link pairs.
    ///
    /// Target names are sorted lexicographically at every level, so the
    /// tree shape is deterministic regardless of document order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a required environment variable is
    /// missing; no partial tree is produced.
    pub fn parse(&self, config: &Config) -> Result<Tree, ParseError> {
        let inherited = Inherited {
            base_dir: self.expand(&config.base_dir)?,
            use_home: config.use_home,
            flatten: config.flatten,
        };
        let children = self.parse_children(config, &inherited, &[], &[])?;
        Ok(Tree::new(Node::root(children)))
    }

    fn parse_children(
        &self,
        config: &Config,
        inherited: &Inherited,
        target_path: &[String],
        link_path: &[String],
    ) -> Result<Vec<Node>, ParseError> {
        let mut names: Vec<&str> = config.targets.iter().map(String::as_str).collect();
        names.sort_unstable();

        let default_config = Config::default();
        let mut children = Vec::with_capacity(names.len());
        for raw in names {
            // Options lookup uses the declared (pre-substitution) literal;
            // the substituted value only shapes the emitted paths.
            let target_config = config.option(raw).unwrap_or(&default_config);

            if !target_config.tags.is_empty()
                && !target_config.tags.iter().any(|t| self.tags.contains(t))
            {
                tracing::debug!(name = raw, "excluded by tags");
                continue;
            }

            let effective = Inherited {
                base_dir: if target_config.base_dir.is_empty() {
                    inherited.base_dir.clone()
                } else {
                    self.expand(&target_config.base_dir)?
                },
                use_home: target_config.use_home.or(inherited.use_home),
                flatten: target_config.flatten || inherited.flatten,
            };

            let name = self.expand(raw)?;
            let mut target_segments = target_path.to_vec();
            target_segments.push(name.clone());

            let link_segments = match target_config.link.as_deref() {
                // An explicit empty rename suppresses the link.
                Some("") => Vec::new(),
                rename => {
                    let leaf = rename.map_or_else(|| name.clone(), ToString::to_string);
                    if effective.flatten {
                        // The leaf collapses to the base directory instead
                        // of nesting under its ancestors.
                        vec![leaf]
                    } else {
                        let mut segments = link_path.to_vec();
                        segments.push(leaf);
                        segments
                    }
                }
            };

            let link_base = if effective.base_dir.is_empty() {
                let mode = if effective.use_home == Some(true) {
                    Mode::Home
                } else {
                    Mode::User
                };
                self.base_dirs.dir(mode).to_path_buf()
            } else {
                PathBuf::from(&effective.base_dir)
            };

            let mut node = Node::new(
                File::new(self.cwd.clone(), target_segments.clone()),
                File::new(link_base, link_segments.clone()),
            );
            node.children = self.parse_children(
                target_config,
                &effective,
                &target_segments,
                &link_segments,
            )?;
            children.push(node);
        }
        Ok(children)
    }

    fn expand(&self, s: &str) -> Result<String, ParseError> {
        if !self.envsubst {
            return Ok(s.to_string());
        }
        shellexpand::env(s)
            .map(Cow::into_owned)
            .map_err(|e| ParseError::UndefinedVariable { name: e.var_name })
    }
}
