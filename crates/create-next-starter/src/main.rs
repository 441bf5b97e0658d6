//! create-next-starter - scaffold a Next.js starter project

use anyhow::Result;
use clap::Parser;
use starter_core::selection::{PackageManager, TailwindVersion};
use starter_core::tui::CreateArgs;
use starter_core::Product;
use std::path::PathBuf;

/// Next.js starter product configuration
#[derive(Clone)]
pub struct NextStarter;

impl Product for NextStarter {
    fn name(&self) -> &'static str {
        "create-next-starter"
    }

    fn display_name(&self) -> &'static str {
        "Next.js Starter"
    }

    fn default_project_name(&self) -> &'static str {
        "my-next-app"
    }

    fn docs_url(&self) -> &'static str {
        "https://nextjs.org/docs"
    }

    fn next_steps(
        &self,
        project_name: &str,
        manager: PackageManager,
        install_ok: bool,
    ) -> Vec<String> {
        let mut steps = vec![format!("cd {}", project_name)];
        if !install_ok {
            steps.push(format!("{} install", manager.binary()));
        }
        steps.push(manager.run_dev_command().to_string());
        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-next-starter")]
#[command(about = "Scaffold a Next.js starter project")]
#[command(version)]
pub struct Args {
    /// Destination project name
    pub name: Option<String>,

    /// Package manager to install with (npm, yarn, pnpm)
    #[arg(short, long = "package-manager")]
    pub package_manager: Option<String>,

    /// Tailwind CSS major version (v3, v4)
    #[arg(short, long)]
    pub tailwind: Option<String>,

    /// Optional feature categories to include (comma-separated, e.g. ui,query,forms)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// UI components to keep when the ui category is included (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub components: Option<Vec<String>>,

    /// Local directory to use as the template root (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// External catalog YAML replacing the built-in package catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Skip the dependency-install step
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl TryFrom<Args> for CreateArgs {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let package_manager = args
            .package_manager
            .map(|s| {
                PackageManager::parse(&s)
                    .ok_or_else(|| anyhow::anyhow!("Unknown package manager: {}", s))
            })
            .transpose()?;
        let tailwind = args
            .tailwind
            .map(|s| {
                TailwindVersion::parse(&s)
                    .ok_or_else(|| anyhow::anyhow!("Unsupported Tailwind version: {}", s))
            })
            .transpose()?;

        Ok(CreateArgs {
            project_name: args.name,
            package_manager,
            tailwind,
            features: args.features,
            components: args.components,
            template_dir: args.template_dir,
            catalog: args.catalog,
            skip_install: args.skip_install,
            yes: args.yes,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let product = NextStarter;

    // Run the TUI application with the create args
    let result = starter_core::run(&product, args.try_into()?).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
