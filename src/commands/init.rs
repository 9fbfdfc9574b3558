//! `init` — create the configuration document from the source tree.

use std::io::Write;

use anyhow::{bail, Context as _, Result};

use crate::cli::InitOpts;
use crate::config::{document, Config, TargetFilter};
use crate::fs::{FileSystem as _, SystemFileSystem};

use super::Environment;

/// Write a fresh document listing the root's eligible entries.
///
/// With `--force` an existing document keeps its options and only has its
/// top-level targets replaced.
///
/// # Errors
///
/// Fails when the document already exists without `--force`, or on
/// document or directory I/O errors.
pub fn run(env: &Environment, opts: &InitOpts, out: &mut dyn Write) -> Result<()> {
    let exists = env.config_path.exists();
    if exists && !opts.force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            env.config_path.display()
        );
    }

    let entries = SystemFileSystem
        .read_dir(&env.root)
        .with_context(|| format!("could not read {}", env.root.display()))?;

    let mut filter = TargetFilter {
        include: opts.filter.include.iter().cloned().collect(),
        exclude: opts.filter.exclude.iter().cloned().collect(),
        include_hidden: opts.filter.hidden,
    };
    // The document never lists itself.
    filter.exclude.insert(env.config_file_name());

    let mut config = if exists {
        document::load(&env.config_path)?
    } else {
        Config::default()
    };
    config.targets = filter.eligible(&entries);

    document::save(&env.config_path, &config)?;
    writeln!(
        out,
        "initialized {} with {} targets",
        env.config_path.display(),
        config.targets.len()
    )?;
    Ok(())
}
