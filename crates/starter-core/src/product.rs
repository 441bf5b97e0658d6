//! Product configuration trait for CLI binaries
//!
//! The bin crate implements this to give the shared wizard its identity:
//! names, docs link, and the post-generation instructions.

use crate::selection::PackageManager;

/// Configuration trait for a starter-kit product
pub trait Product: Clone + Send + Sync + 'static {
    /// Internal product name (CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// Destination directory name used when the operator gives none
    fn default_project_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// The "next steps" instructions after project creation.
    /// `install_ok` is false when installation failed or was skipped.
    fn next_steps(
        &self,
        project_name: &str,
        manager: PackageManager,
        install_ok: bool,
    ) -> Vec<String>;
}
