//! `show` — print the target tree without touching the filesystem.

use std::io::Write;

use anyhow::Result;

use crate::config::document;

use super::Environment;

/// Parse the document and render the unresolved tree.
///
/// # Errors
///
/// Fails on document I/O, parse, or output errors.
pub fn run(env: &Environment, out: &mut dyn Write) -> Result<()> {
    let config = document::load(&env.config_path)?;
    let tree = env.parser().parse(&config)?;
    write!(out, "{tree}")?;
    Ok(())
}
