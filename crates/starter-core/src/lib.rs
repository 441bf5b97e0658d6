//! Starter Core - library behind the `create-next-starter` CLI
//!
//! Scaffolds a Next.js starter project from the bundled template tree:
//! collect a [`Selection`], copy the template, rewrite `package.json`,
//! materialize the chosen Tailwind configuration, delete declined feature
//! files, and install dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Core operations** - pure selection/catalog/manifest/patch logic plus
//!   thin filesystem wrappers (`catalog`, `manifest`, `templates`, `config`)
//! - **Runtime** - package-manager detection and the install subprocess
//! - **CLI/TUI interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module

pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod product;
pub mod runtime;
pub mod selection;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{ComponentDescriptor, FeatureCatalog, UI_COMPONENTS};
pub use config::{materialize, MaterializeReport, PatchOutcome};
pub use error::ScaffoldError;
pub use manifest::{rewrite_manifest, rewrite_manifest_file};
pub use product::Product;
pub use selection::{PackageManager, Selection, TailwindVersion};
pub use templates::{cleanup_declined, copy_template};

#[cfg(feature = "tui")]
pub use tui::run;
