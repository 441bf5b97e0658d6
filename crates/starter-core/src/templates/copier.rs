//! Recursive template copying with a fixed exclusion list

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Entries never copied into a generated project: version-control metadata,
/// dependency caches, build output, the generator's own bin directory, local
/// environment files, and package-manager debug logs. Patterns ending in `*`
/// are prefix matches.
pub const EXCLUDED_ENTRIES: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "bin",
    ".env.local",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
];

/// Check an entry name against the exclusion list
fn is_excluded(name: &str) -> bool {
    EXCLUDED_ENTRIES.iter().any(|pattern| {
        if let Some(prefix) = pattern.strip_suffix('*') {
            name.starts_with(prefix)
        } else {
            name == *pattern
        }
    })
}

/// Copy the template tree into a fresh destination directory.
///
/// The destination must not already exist; if it does, the run aborts before
/// any file is written. Excluded entries are skipped whole (an excluded
/// directory is never descended into). Files are copied byte-for-byte.
/// Returns the number of files copied.
pub async fn copy_template(source: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        return Err(ScaffoldError::DestinationExists(dest.to_path_buf()).into());
    }
    if !source.is_dir() {
        return Err(ScaffoldError::TemplateMissing(source.to_path_buf()).into());
    }

    fs::create_dir_all(dest)
        .await
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut copied = 0usize;
    let walker = WalkDir::new(source)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_excluded(&entry.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry.context("Failed to read template entry")?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("Template entry outside the template root")?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .await
                .with_context(|| format!("Failed to copy {}", relative.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
