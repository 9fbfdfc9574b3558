//! `check` — resolve against the filesystem and report statuses.

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::CheckOpts;
use crate::config::document;
use crate::fs::SystemFileSystem;
use crate::linker::{ConflictError, LinkError, Linker};

use super::Environment;

/// Resolve the whole tree and print it with per-node status tags.
///
/// Conflicts are listed on `err`; with `--fail` they also make the run
/// return an error.
///
/// # Errors
///
/// Fails on document, parse, or filesystem I/O errors, and on conflicts
/// when `--fail` is set.
pub fn run(
    env: &Environment,
    opts: &CheckOpts,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let config = document::load(&env.config_path)?;
    let mut tree = env.parser().parse(&config)?;

    let fs = SystemFileSystem;
    let conflicts = match Linker::new(&fs).resolve_tree(&mut tree) {
        Ok(()) => None,
        Err(LinkError::Conflicts(conflicts)) => Some(conflicts),
        Err(LinkError::Io(io_err)) => {
            return Err(io_err).context("could not resolve the tree");
        }
    };

    write!(out, "{tree}")?;
    if let Some(conflicts) = conflicts {
        for conflict in &conflicts.errors {
            writeln!(err, "{conflict}")?;
        }
        if opts.fail {
            return Err(conflicts.into());
        }
    }
    Ok(())
}

/// Whether an error returned by [`run`] is a conflict report rather than
/// a genuine failure.
#[must_use]
pub fn is_conflict(error: &anyhow::Error) -> bool {
    error.is::<ConflictError>()
}
