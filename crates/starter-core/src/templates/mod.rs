//! Template tree copying and post-copy cleanup

pub mod cleanup;
pub mod copier;

pub use cleanup::cleanup_declined;
pub use copier::copy_template;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the template root
pub const TEMPLATE_ROOT_ENV: &str = "CREATE_NEXT_STARTER_TEMPLATE";

/// Resolve the template root: explicit flag, then env override, then the
/// directory one level above the installed binary (the template ships with
/// the generator, which lives in its `bin/` directory).
pub fn resolve_template_root(flag: &Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var(TEMPLATE_ROOT_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("Failed to locate the generator binary")?;
    exe.parent()
        .and_then(|bin_dir| bin_dir.parent())
        .map(PathBuf::from)
        .context("Generator binary has no parent directory")
}
