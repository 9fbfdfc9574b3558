//! `config` — set per-target options in the document.

use std::io::Write;

use anyhow::Result;

use crate::cli::ConfigOpts;
use crate::config::{document, Config, SetMode};

use super::Environment;

/// Apply the given overrides to the target at the slash-separated path.
///
/// Undeclared paths are left untouched, matching the merge semantics of
/// the document model.
///
/// # Errors
///
/// Fails on document I/O errors.
pub fn run(env: &Environment, opts: &ConfigOpts, out: &mut dyn Write) -> Result<()> {
    let mut config = document::load(&env.config_path)?;

    let use_home = if opts.use_home {
        Some(true)
    } else if opts.no_use_home {
        Some(false)
    } else {
        None
    };

    config.set(
        &opts.path,
        Config {
            base_dir: opts.base_dir.clone().unwrap_or_default(),
            link: opts.link.clone(),
            flatten: opts.flatten,
            use_home,
            tags: opts.tags.clone(),
            ..Config::default()
        },
        SetMode::Config,
    );

    // Nested targets are replaced separately; the config merge keeps the
    // ones already recorded.
    if !opts.targets.is_empty() {
        config.set(
            &opts.path,
            Config {
                targets: opts.targets.clone(),
                ..Config::default()
            },
            SetMode::Scan,
        );
    }

    document::save(&env.config_path, &config)?;
    writeln!(out, "configured {}", opts.path)?;
    Ok(())
}
