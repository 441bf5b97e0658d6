//! Post-copy cleanup of declined features and generator metadata

use crate::catalog::{FeatureCatalog, UI_COMPONENTS};
use crate::selection::{Selection, TailwindVersion};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Generator-only entries removed from every generated project, whatever the
/// selection. The copier already skips these; removing them again keeps the
/// pass safe when the template root and destination overlap in layout.
const GENERATOR_ARTIFACTS: &[&str] = &["bin", ".github"];

/// Staged styling variants consumed (or ignored) by the config materializer;
/// neither belongs in a generated project.
const STYLING_VARIANTS: &[&str] = &["tailwind.config.v3.js", "src/app/globals.v3.css"];

/// Delete template files for declined categories, unselected UI components,
/// styling variants of the unchosen Tailwind version, and generator metadata.
/// Deleting an already-absent path is a no-op. Returns the paths removed,
/// relative to the project root.
pub async fn cleanup_declined(
    project_dir: &Path,
    selection: &Selection,
    catalog: &FeatureCatalog,
) -> Result<Vec<String>> {
    let mut removed = Vec::new();

    for (name, category) in &catalog.categories {
        if selection.wants(name) {
            continue;
        }
        for file in &category.cleanup {
            if remove_entry(&project_dir.join(file)).await? {
                removed.push(file.clone());
            }
        }
    }

    // Accepted UI category: drop the component templates that were not picked
    if selection.wants("ui") {
        for descriptor in UI_COMPONENTS {
            let picked = selection
                .components
                .iter()
                .any(|c| c.eq_ignore_ascii_case(descriptor.name) || c == descriptor.file);
            if !picked && remove_entry(&project_dir.join(descriptor.file)).await? {
                removed.push(descriptor.file.to_string());
            }
        }
    }

    for entry in GENERATOR_ARTIFACTS.iter().chain(STYLING_VARIANTS) {
        if remove_entry(&project_dir.join(entry)).await? {
            removed.push(entry.to_string());
        }
    }

    // v4 is CSS-first; the legacy config file only survives a v3 run
    if selection.tailwind == TailwindVersion::V4
        && remove_entry(&project_dir.join("tailwind.config.js")).await?
    {
        removed.push("tailwind.config.js".to_string());
    }

    // stray npm pack artifacts from template development
    let mut entries = fs::read_dir(project_dir)
        .await
        .with_context(|| format!("Failed to list {}", project_dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".tgz") && remove_entry(&entry.path()).await? {
            removed.push(name);
        }
    }

    Ok(removed)
}

/// Remove a file or directory tree; absent paths are a no-op.
/// Returns whether anything was deleted.
async fn remove_entry(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(path)
                .await
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(path)
                .await
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scaffold_fixture() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("demo");
        for dir in [
            "src/hooks",
            "src/components/forms",
            "src/components/ui",
            "src/app",
            "bin",
        ] {
            std::fs::create_dir_all(root.join(dir)).unwrap();
        }
        std::fs::write(root.join("src/hooks/use-query-data.ts"), "x").unwrap();
        std::fs::write(root.join("src/components/forms/login-form.tsx"), "x").unwrap();
        std::fs::write(root.join("src/components/ui/button.tsx"), "x").unwrap();
        std::fs::write(root.join("src/components/ui/textarea.tsx"), "x").unwrap();
        std::fs::write(root.join("bin/create.js"), "x").unwrap();
        std::fs::write(root.join("tailwind.config.js"), "x").unwrap();
        std::fs::write(root.join("tailwind.config.v3.js"), "x").unwrap();
        std::fs::write(root.join("starter-1.0.0.tgz"), "x").unwrap();
        (tmp, root)
    }

    #[tokio::test]
    async fn test_declined_category_files_removed() {
        let (_tmp, root) = scaffold_fixture();
        let catalog = FeatureCatalog::builtin().unwrap();
        let selection = Selection::new("demo");

        cleanup_declined(&root, &selection, &catalog).await.unwrap();

        assert!(!root.join("src/hooks/use-query-data.ts").exists());
        assert!(!root.join("src/components/forms/login-form.tsx").exists());
        assert!(!root.join("src/components/ui/button.tsx").exists());
    }

    #[tokio::test]
    async fn test_accepted_ui_keeps_picked_components() {
        let (_tmp, root) = scaffold_fixture();
        let catalog = FeatureCatalog::builtin().unwrap();
        let mut selection = Selection::new("demo");
        selection.features.insert("ui".to_string(), true);
        selection.components = vec!["Button".to_string()];

        cleanup_declined(&root, &selection, &catalog).await.unwrap();

        assert!(root.join("src/components/ui/button.tsx").exists());
        assert!(!root.join("src/components/ui/textarea.tsx").exists());
    }

    #[tokio::test]
    async fn test_component_pick_matches_case_insensitively() {
        let (_tmp, root) = scaffold_fixture();
        let catalog = FeatureCatalog::builtin().unwrap();
        let mut selection = Selection::new("demo");
        selection.features.insert("ui".to_string(), true);
        selection.components = vec!["button".to_string()];

        cleanup_declined(&root, &selection, &catalog).await.unwrap();

        // a lowercase pick still keeps the component it names
        assert!(root.join("src/components/ui/button.tsx").exists());
        assert!(!root.join("src/components/ui/textarea.tsx").exists());
    }

    #[tokio::test]
    async fn test_generator_artifacts_always_removed() {
        let (_tmp, root) = scaffold_fixture();
        let catalog = FeatureCatalog::builtin().unwrap();
        let selection = Selection::new("demo");

        cleanup_declined(&root, &selection, &catalog).await.unwrap();

        assert!(!root.join("bin").exists());
        assert!(!root.join("tailwind.config.v3.js").exists());
        assert!(!root.join("starter-1.0.0.tgz").exists());
        // v4 default removes the legacy config as well
        assert!(!root.join("tailwind.config.js").exists());
    }

    #[tokio::test]
    async fn test_v3_keeps_legacy_config_and_pass_is_idempotent() {
        let (_tmp, root) = scaffold_fixture();
        let catalog = FeatureCatalog::builtin().unwrap();
        let mut selection = Selection::new("demo");
        selection.tailwind = TailwindVersion::V3;

        cleanup_declined(&root, &selection, &catalog).await.unwrap();
        assert!(root.join("tailwind.config.js").exists());

        // second pass sees only absent files and removes nothing new
        let removed = cleanup_declined(&root, &selection, &catalog).await.unwrap();
        assert!(removed.is_empty());
    }
}
