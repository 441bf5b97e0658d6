//! Dependency installation via the chosen package manager

use crate::selection::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// The command an operator runs by hand when installation fails
pub fn manual_install_command(manager: PackageManager, project_name: &str) -> String {
    format!("cd {} && {} install", project_name, manager.binary())
}

/// Run the package manager's install subcommand inside the destination with
/// inherited stdio. Errors here are the caller's to downgrade: generation is
/// still a success when installation fails.
pub async fn install_dependencies(project_dir: &Path, manager: PackageManager) -> Result<()> {
    println!();
    println!(
        "{} {} {}",
        "Running:".dimmed(),
        manager.binary().yellow(),
        manager.install_args().join(" ").yellow()
    );
    println!();

    let status = TokioCommand::new(manager.binary())
        .args(manager.install_args())
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to spawn {}", manager.binary()))?;

    if !status.success() {
        anyhow::bail!(
            "{} install exited with code {}",
            manager.binary(),
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_install_command() {
        assert_eq!(
            manual_install_command(PackageManager::Pnpm, "demo"),
            "cd demo && pnpm install"
        );
        assert_eq!(
            manual_install_command(PackageManager::Npm, "my-next-app"),
            "cd my-next-app && npm install"
        );
    }
}
