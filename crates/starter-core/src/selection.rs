//! Operator choices collected by the wizard

use indexmap::IndexMap;
use std::fmt;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Binary invoked for both `--version` probing and installation
    pub fn binary(&self) -> &'static str {
        self.display_name()
    }

    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install"],
            PackageManager::Yarn => &["install"],
            PackageManager::Pnpm => &["install"],
        }
    }

    /// The command shown in "next steps" for starting the dev server
    pub fn run_dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
        }
    }

    pub fn parse(s: &str) -> Option<PackageManager> {
        match s.to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported Tailwind CSS major versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TailwindVersion {
    V3,
    V4,
}

impl TailwindVersion {
    pub fn display_name(&self) -> &'static str {
        match self {
            TailwindVersion::V3 => "Tailwind CSS v3",
            TailwindVersion::V4 => "Tailwind CSS v4",
        }
    }

    /// Key used for version-conditional sub-maps in the feature catalog
    pub fn catalog_key(&self) -> &'static str {
        match self {
            TailwindVersion::V3 => "v3",
            TailwindVersion::V4 => "v4",
        }
    }

    /// Fallback variant when a category has no sub-map for the chosen version
    pub fn fallback() -> TailwindVersion {
        TailwindVersion::V3
    }

    pub fn parse(s: &str) -> Option<TailwindVersion> {
        match s.to_lowercase().as_str() {
            "v3" | "3" => Some(TailwindVersion::V3),
            "v4" | "4" => Some(TailwindVersion::V4),
            _ => None,
        }
    }
}

impl fmt::Display for TailwindVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The full record of operator decisions for one generation run.
///
/// Owned by the wizard and passed by shared reference downstream; no
/// downstream component mutates it.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Destination directory name, also the package name in the manifest
    pub project_name: String,

    pub package_manager: PackageManager,

    pub tailwind: TailwindVersion,

    /// Feature-category name -> accepted. Names not present in the catalog
    /// are ignored when merging.
    pub features: IndexMap<String, bool>,

    /// UI-component files to keep, meaningful only when the `ui` category
    /// is accepted. Empty means none.
    pub components: Vec<String>,

    pub skip_install: bool,
}

impl Selection {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            package_manager: PackageManager::Npm,
            tailwind: TailwindVersion::V4,
            features: IndexMap::new(),
            components: Vec::new(),
            skip_install: false,
        }
    }

    /// Whether a feature category was accepted
    pub fn wants(&self, category: &str) -> bool {
        self.features.get(category).copied().unwrap_or(false)
    }
}
