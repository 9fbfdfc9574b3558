//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "dotlink",
    about = "Declarative dotfile symlink manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Configuration document to read and write
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Source tree root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configuration document from the source tree's entries
    Init(InitOpts),
    /// Record a directory's entries as nested targets
    Scan(ScanOpts),
    /// Set per-target options
    Config(ConfigOpts),
    /// Print the target tree without touching the filesystem
    Show,
    /// Resolve the tree against the filesystem and print statuses
    Check(CheckOpts),
    /// Create a symlink for every ready target
    Link(LinkOpts),
}

/// Entry-selection options shared by `init` and `scan`.
#[derive(Parser, Debug, Clone)]
pub struct FilterOpts {
    /// Record only these entries
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Leave these entries out
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Also record hidden (dot-prefixed) entries
    #[arg(long)]
    pub hidden: bool,
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Overwrite an existing document, keeping its non-target fields
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub filter: FilterOpts,
}

/// Options for the `scan` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ScanOpts {
    /// Slash-separated target path of the directory to scan
    pub path: String,

    #[command(flatten)]
    pub filter: FilterOpts,
}

/// Options for the `config` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ConfigOpts {
    /// Slash-separated target path to configure
    pub path: String,

    /// Base directory the link resolves under
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Rename the link (empty string suppresses linking)
    #[arg(long)]
    pub link: Option<String>,

    /// Resolve the link under the home directory
    #[arg(long, conflicts_with = "no_use_home")]
    pub use_home: bool,

    /// Resolve the link under the user configuration directory
    #[arg(long)]
    pub no_use_home: bool,

    /// Drop the target's own directory from descendant link paths
    #[arg(long)]
    pub flatten: bool,

    /// Replace the target's nested targets
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Tags gating the target
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

/// Options for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckOpts {
    /// Exit non-zero when conflicts are found
    #[arg(long)]
    pub fail: bool,
}

/// Options for the `link` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LinkOpts {
    /// Include targets gated behind these tags
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}
