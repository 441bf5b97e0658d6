//! Charm-style CLI prompts using cliclack

use crate::catalog::{FeatureCatalog, UI_COMPONENTS};
use crate::config;
use crate::error::ScaffoldError;
use crate::manifest;
use crate::product::Product;
use crate::runtime::{check, installer};
use crate::selection::{PackageManager, Selection, TailwindVersion};
use crate::templates::{self, cleanup, copier};
use anyhow::Result;
use indexmap::IndexMap;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Destination project name (positional)
    pub project_name: Option<String>,

    /// Package manager to install with
    pub package_manager: Option<PackageManager>,

    /// Tailwind CSS major version
    pub tailwind: Option<TailwindVersion>,

    /// Feature categories to include (pre-answers the multiselect)
    pub features: Option<Vec<String>>,

    /// UI components to keep (pre-answers the component multiselect)
    pub components: Option<Vec<String>>,

    /// Local directory to use as the template root
    pub template_dir: Option<PathBuf>,

    /// External catalog document replacing the built-in one
    pub catalog: Option<PathBuf>,

    /// Skip the dependency-install step
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: Product>(product: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(product.display_name())?;

    // Step 1: catalog and template root
    let catalog = load_catalog(&args)?;
    let template_root = templates::resolve_template_root(&args.template_dir)?;

    // Step 2: project name, and fail fast on an existing destination
    let project_name = select_project_name(product, &args)?;
    let project_dir = std::env::current_dir()?.join(&project_name);
    if project_dir.exists() {
        return Err(ScaffoldError::DestinationExists(project_dir).into());
    }

    // Steps 3-6: the remaining choices
    let package_manager = select_package_manager(&args)?;
    let tailwind = select_tailwind_version(&args)?;
    let features = select_features(&catalog, &args)?;
    let components = select_components(&features, &args)?;

    let selection = Selection {
        project_name: project_name.clone(),
        package_manager,
        tailwind,
        features,
        components,
        skip_install: args.skip_install,
    };

    // Step 7: show the collected choices and confirm before touching disk
    confirm_summary(&selection, &catalog, &args)?;

    // Step 8: copy, rewrite, materialize, clean up
    generate(&template_root, &project_dir, &selection, &catalog).await?;

    // Step 9: install dependencies (non-fatal)
    let install_ok = run_install(&project_dir, &selection).await?;

    // Step 10: show next steps
    print_next_steps(product, &selection, install_ok)?;

    Ok(())
}

/// One line per collected choice, shown before generation
fn summary_lines(selection: &Selection, catalog: &FeatureCatalog) -> Vec<String> {
    let mut lines = vec![
        format!("Project: {}", selection.project_name),
        format!("Package manager: {}", selection.package_manager),
        format!("Styling: {}", selection.tailwind),
    ];

    let accepted: Vec<&str> = catalog
        .categories
        .iter()
        .filter(|(name, _)| selection.wants(name))
        .map(|(_, category)| category.label.as_str())
        .collect();
    lines.push(if accepted.is_empty() {
        "Optional packages: none".to_string()
    } else {
        format!("Optional packages: {}", accepted.join(", "))
    });

    if selection.wants("ui") {
        let components = if selection.components.is_empty() {
            "none".to_string()
        } else {
            selection.components.join(", ")
        };
        lines.push(format!("UI components: {}", components));
    }

    lines
}

fn confirm_summary(
    selection: &Selection,
    catalog: &FeatureCatalog,
    args: &CreateArgs,
) -> Result<()> {
    cliclack::log::info(summary_lines(selection, catalog).join("\n"))?;

    if args.yes {
        return Ok(());
    }

    let proceed: bool = cliclack::confirm("Create project?")
        .initial_value(true)
        .interact()?;

    if !proceed {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(())
}

fn load_catalog(args: &CreateArgs) -> Result<FeatureCatalog> {
    match &args.catalog {
        Some(path) => {
            cliclack::log::info(format!("Using catalog from {}", path.display()))?;
            FeatureCatalog::load(path)
        }
        None => FeatureCatalog::builtin(),
    }
}

fn select_project_name<C: Product>(product: &C, args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.project_name {
        return Ok(name.clone());
    }
    if args.yes {
        return Ok(product.default_project_name().to_string());
    }

    let name: String = cliclack::input("Project name")
        .placeholder(product.default_project_name())
        .default_input(product.default_project_name())
        .interact()?;

    Ok(if name.is_empty() {
        product.default_project_name().to_string()
    } else {
        name
    })
}

fn select_package_manager(args: &CreateArgs) -> Result<PackageManager> {
    if let Some(manager) = args.package_manager {
        return Ok(manager);
    }

    let detected = check::detect_default();
    if args.yes {
        cliclack::log::info(format!("Using detected package manager: {}", detected))?;
        return Ok(detected);
    }

    let mut select = cliclack::select("Package manager").initial_value(detected);
    for info in check::probe_all() {
        let hint = match &info.version {
            Some(version) => format!("v{}", version.trim_start_matches('v')),
            None => "not installed".to_string(),
        };
        select = select.item(info.manager, info.manager.display_name(), hint);
    }

    Ok(select.interact()?)
}

fn select_tailwind_version(args: &CreateArgs) -> Result<TailwindVersion> {
    if let Some(version) = args.tailwind {
        return Ok(version);
    }
    if args.yes {
        return Ok(TailwindVersion::V4);
    }

    let version: TailwindVersion = cliclack::select("Tailwind CSS version")
        .initial_value(TailwindVersion::V4)
        .item(TailwindVersion::V4, "v4", "CSS-first configuration")
        .item(TailwindVersion::V3, "v3", "legacy tailwind.config.js")
        .interact()?;

    Ok(version)
}

fn select_features(catalog: &FeatureCatalog, args: &CreateArgs) -> Result<IndexMap<String, bool>> {
    let mut features: IndexMap<String, bool> =
        catalog.categories.keys().map(|name| (name.clone(), false)).collect();

    if let Some(requested) = &args.features {
        for name in requested {
            match features.get_mut(name.as_str()) {
                Some(included) => *included = true,
                None => cliclack::log::warning(format!("Unknown feature category: {}", name))?,
            }
        }
        return Ok(features);
    }

    // --yes keeps the template lean: no optional categories
    if args.yes {
        return Ok(features);
    }

    let mut multi = cliclack::multiselect("Optional packages");
    for (name, category) in &catalog.categories {
        multi = multi.item(name.clone(), &category.label, &category.hint);
    }
    let accepted: Vec<String> = multi.required(false).interact()?;

    for name in accepted {
        if let Some(included) = features.get_mut(name.as_str()) {
            *included = true;
        }
    }

    Ok(features)
}

fn select_components(
    features: &IndexMap<String, bool>,
    args: &CreateArgs,
) -> Result<Vec<String>> {
    if !features.get("ui").copied().unwrap_or(false) {
        return Ok(Vec::new());
    }

    if let Some(requested) = &args.components {
        let mut components = Vec::new();
        for name in requested {
            // store the descriptor's canonical name, whatever casing was given
            match UI_COMPONENTS
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(name) || c.file == name)
            {
                Some(descriptor) => components.push(descriptor.name.to_string()),
                None => cliclack::log::warning(format!("Unknown UI component: {}", name))?,
            }
        }
        return Ok(components);
    }

    // default to all components when not asked interactively
    if args.yes {
        return Ok(UI_COMPONENTS.iter().map(|c| c.name.to_string()).collect());
    }

    let mut multi = cliclack::multiselect("HeroUI components");
    for descriptor in UI_COMPONENTS {
        multi = multi.item(descriptor.name.to_string(), descriptor.name, descriptor.file);
    }

    Ok(multi.required(false).interact()?)
}

async fn generate(
    template_root: &PathBuf,
    project_dir: &PathBuf,
    selection: &Selection,
    catalog: &FeatureCatalog,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Copying template files...");
    let copied = copier::copy_template(template_root, project_dir).await?;
    spinner.stop(format!("Copied {} files to {}", copied, project_dir.display()));

    let spinner = cliclack::spinner();
    spinner.start("Rewriting package.json...");
    manifest::rewrite_manifest_file(project_dir, selection, catalog).await?;
    spinner.stop("Rewrote package.json");

    let spinner = cliclack::spinner();
    spinner.start(format!("Configuring {}...", selection.tailwind));
    let report = config::materialize(project_dir, selection).await?;
    spinner.stop(format!("Configured {}", selection.tailwind));
    for name in report.skipped() {
        cliclack::log::warning(format!("Patch '{}' found no anchor, skipped", name))?;
    }

    let removed = cleanup::cleanup_declined(project_dir, selection, catalog).await?;
    if !removed.is_empty() {
        cliclack::log::info(format!("Removed {} declined template files", removed.len()))?;
    }

    Ok(())
}

/// Returns whether dependencies ended up installed
async fn run_install(project_dir: &PathBuf, selection: &Selection) -> Result<bool> {
    if selection.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        return Ok(false);
    }

    cliclack::log::info(format!(
        "Installing dependencies with {}...",
        selection.package_manager
    ))?;

    match installer::install_dependencies(project_dir, selection.package_manager).await {
        Ok(()) => {
            cliclack::log::success("Dependencies installed")?;
            Ok(true)
        }
        Err(e) => {
            cliclack::log::warning(format!(
                "Failed to install dependencies: {}\nRun it manually: {}",
                e,
                installer::manual_install_command(
                    selection.package_manager,
                    &selection.project_name
                )
            ))?;
            Ok(false)
        }
    }
}

fn print_next_steps<C: Product>(
    product: &C,
    selection: &Selection,
    install_ok: bool,
) -> Result<()> {
    let steps = product.next_steps(
        &selection.project_name,
        selection.package_manager,
        install_ok,
    );

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Docs: {}", product.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_accepted_labels() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let mut selection = Selection::new("demo");
        selection.features.insert("ui".to_string(), true);
        selection.features.insert("query".to_string(), true);
        selection.components = vec!["Button".to_string()];

        let lines = summary_lines(&selection, &catalog);
        assert_eq!(lines[0], "Project: demo");
        assert!(lines
            .iter()
            .any(|l| l.contains("HeroUI components") && l.contains("TanStack Query")));
        assert!(lines.iter().any(|l| l == "UI components: Button"));
    }

    #[test]
    fn test_summary_with_everything_declined() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let selection = Selection::new("demo");

        let lines = summary_lines(&selection, &catalog);
        assert!(lines.iter().any(|l| l == "Optional packages: none"));
        // no component line without the ui category
        assert!(!lines.iter().any(|l| l.starts_with("UI components")));
    }
}
