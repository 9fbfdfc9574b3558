//! Reading and writing the configuration document.
//!
//! The document is TOML at a well-known default name inside the source
//! tree.  The resolution core never touches this module; commands load the
//! document before parsing and save it back after config edits.

use std::path::Path;

use anyhow::{Context as _, Result};

use super::Config;

/// Load the configuration document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration document");
    toml::from_str(&content)
        .with_context(|| format!("parsing configuration {}", path.display()))
}

/// Serialize `config` and write it to `path`, preserving the file's
/// permission bits when it already exists.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save(path: &Path, config: &Config) -> Result<()> {
    let perms = std::fs::metadata(path).ok().map(|m| m.permissions());
    let content = toml::to_string(config).context("serializing configuration")?;
    std::fs::write(path, content)
        .with_context(|| format!("writing configuration {}", path.display()))?;
    if let Some(perms) = perms {
        std::fs::set_permissions(path, perms)
            .with_context(|| format!("restoring permissions on {}", path.display()))?;
    }
    Ok(())
}
