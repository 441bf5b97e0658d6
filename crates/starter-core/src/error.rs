//! Typed errors for scaffold preconditions

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run before or during filesystem mutation.
///
/// Workflow code wraps these in `anyhow::Error`; they exist as a typed enum so
/// callers and tests can match on the precondition that failed.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("directory '{0}' already exists")]
    DestinationExists(PathBuf),

    #[error("template directory not found: {0}")]
    TemplateMissing(PathBuf),

    #[error("failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("expected file missing from template: {0}")]
    StylesheetMissing(PathBuf),
}
