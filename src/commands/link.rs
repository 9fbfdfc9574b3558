//! `link` — create symlinks for every ready target.

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::LinkOpts;
use crate::config::document;
use crate::fs::SystemFileSystem;
use crate::linker::{LinkError, Linker};

use super::Environment;

/// Resolve the tree and create a symlink for every `Ready` node.
///
/// Conflicting nodes do not stop the run: clean targets are still
/// linked, each conflict is written to `err`, and the aggregate comes
/// back as the command's error.
///
/// # Errors
///
/// Fails on document, parse, or filesystem errors, and on conflicts.
pub fn run(
    env: &Environment,
    opts: &LinkOpts,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let config = document::load(&env.config_path)?;
    let mut tree = env
        .parser()
        .tags(opts.tags.iter().cloned())
        .parse(&config)?;

    let fs = SystemFileSystem;
    match Linker::new(&fs).link(&mut tree) {
        Ok(()) => {
            write!(out, "{tree}")?;
            Ok(())
        }
        Err(LinkError::Conflicts(conflicts)) => {
            write!(out, "{tree}")?;
            for conflict in &conflicts.errors {
                writeln!(err, "{conflict}")?;
            }
            Err(conflicts.into())
        }
        Err(LinkError::Io(io_err)) => Err(io_err).context("could not create symlinks"),
    }
}
