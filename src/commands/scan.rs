//! `scan` — record a directory's entries as nested targets.

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::ScanOpts;
use crate::config::{document, Config, SetMode, TargetFilter};
use crate::fs::{FileSystem as _, SystemFileSystem};

use super::{target_dir, Environment};

/// Read the directory at the target path and store its eligible entries
/// as that target's nested targets, keeping its other options.
///
/// # Errors
///
/// Fails on document or directory I/O errors.
pub fn run(env: &Environment, opts: &ScanOpts, out: &mut dyn Write) -> Result<()> {
    let mut config = document::load(&env.config_path)?;

    let dir = target_dir(&env.root, &opts.path);
    let entries = SystemFileSystem
        .read_dir(&dir)
        .with_context(|| format!("could not read {}", dir.display()))?;

    let filter = TargetFilter {
        include: opts.filter.include.iter().cloned().collect(),
        exclude: opts.filter.exclude.iter().cloned().collect(),
        include_hidden: opts.filter.hidden,
    };
    let targets = filter.eligible(&entries);
    let count = targets.len();

    config.set(
        &opts.path,
        Config {
            targets,
            ..Config::default()
        },
        SetMode::Scan,
    );

    document::save(&env.config_path, &config)?;
    writeln!(out, "scanned {} ({count} targets)", opts.path)?;
    Ok(())
}
