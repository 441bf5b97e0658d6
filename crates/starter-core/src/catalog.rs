//! Optional-package catalog types and parsing
//!
//! The catalog is data, not code: the built-in document lives in
//! `catalog.yaml` next to this module and can be replaced wholesale with
//! `--catalog <path>`. Package lists drift between template revisions, so
//! nothing outside the catalog names an individual npm package.

use crate::selection::TailwindVersion;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Package entries for a category: either a flat set, or sub-maps keyed by
/// Tailwind major version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageSet {
    ByTailwind {
        by_tailwind: IndexMap<String, IndexMap<String, String>>,
    },
    Fixed(IndexMap<String, String>),
}

/// One optional feature category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCategory {
    /// Display label shown in the feature multiselect
    pub label: String,

    /// One-line hint shown next to the label
    #[serde(default)]
    pub hint: String,

    pub packages: PackageSet,

    /// Packages routed to devDependencies instead of dependencies
    #[serde(default)]
    pub dev_only: Vec<String>,

    /// Template files deleted when the category is declined
    #[serde(default)]
    pub cleanup: Vec<String>,
}

impl FeatureCategory {
    /// Resolve the package set for the chosen Tailwind version, falling back
    /// to the documented fallback variant when no exact sub-map exists.
    pub fn resolve(&self, tailwind: TailwindVersion) -> IndexMap<String, String> {
        match &self.packages {
            PackageSet::Fixed(packages) => packages.clone(),
            PackageSet::ByTailwind { by_tailwind } => by_tailwind
                .get(tailwind.catalog_key())
                .or_else(|| by_tailwind.get(TailwindVersion::fallback().catalog_key()))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Every package name this category can contribute, across all variants
    pub fn package_names(&self) -> Vec<&str> {
        match &self.packages {
            PackageSet::Fixed(packages) => packages.keys().map(String::as_str).collect(),
            PackageSet::ByTailwind { by_tailwind } => {
                let mut names: Vec<&str> = Vec::new();
                for variant in by_tailwind.values() {
                    for name in variant.keys() {
                        if !names.contains(&name.as_str()) {
                            names.push(name);
                        }
                    }
                }
                names
            }
        }
    }

    pub fn is_dev_only(&self, package: &str) -> bool {
        self.dev_only.iter().any(|p| p == package)
    }
}

/// The full catalog: optional feature categories plus the styling-framework
/// package sets keyed by Tailwind major version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCatalog {
    pub categories: IndexMap<String, FeatureCategory>,

    pub tailwind: IndexMap<String, IndexMap<String, String>>,
}

impl FeatureCatalog {
    /// The catalog bundled into the binary
    pub fn builtin() -> Result<Self> {
        serde_yaml::from_str(include_str!("catalog.yaml"))
            .context("Failed to parse built-in catalog")
    }

    /// Load a catalog from an external YAML document
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    /// Tailwind packages for the chosen version (v3 fallback)
    pub fn tailwind_set(&self, version: TailwindVersion) -> IndexMap<String, String> {
        self.tailwind
            .get(version.catalog_key())
            .or_else(|| self.tailwind.get(TailwindVersion::fallback().catalog_key()))
            .cloned()
            .unwrap_or_default()
    }

    /// Every Tailwind package name across all versions, for the purge step
    pub fn tailwind_package_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for variant in self.tailwind.values() {
            for name in variant.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// A static record for each installable UI-component template
#[derive(Debug, Clone, Copy)]
pub struct ComponentDescriptor {
    /// Display name shown in the component multiselect
    pub name: &'static str,
    /// Destination file relative to the project root
    pub file: &'static str,
}

/// Installable HeroUI component templates
pub const UI_COMPONENTS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        name: "Button",
        file: "src/components/ui/button.tsx",
    },
    ComponentDescriptor {
        name: "Hero input",
        file: "src/components/ui/hero-input.tsx",
    },
    ComponentDescriptor {
        name: "Input field",
        file: "src/components/ui/input-field.tsx",
    },
    ComponentDescriptor {
        name: "Textarea",
        file: "src/components/ui/textarea.tsx",
    },
    ComponentDescriptor {
        name: "Spinner",
        file: "src/components/ui/custom-spinner.tsx",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = FeatureCatalog::builtin().unwrap();
        assert!(catalog.categories.contains_key("ui"));
        assert!(catalog.categories.contains_key("query"));
        assert!(catalog.tailwind.contains_key("v3"));
        assert!(catalog.tailwind.contains_key("v4"));
    }

    #[test]
    fn test_version_conditional_resolution() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let ui = &catalog.categories["ui"];

        let v3 = ui.resolve(TailwindVersion::V3);
        let v4 = ui.resolve(TailwindVersion::V4);
        assert!(v3.contains_key("@heroui/react"));
        assert!(v4.contains_key("@heroui/react"));
        assert_ne!(v3["@heroui/react"], v4["@heroui/react"]);
    }

    #[test]
    fn test_fixed_category_ignores_version() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let query = &catalog.categories["query"];

        assert_eq!(
            query.resolve(TailwindVersion::V3),
            query.resolve(TailwindVersion::V4)
        );
    }

    #[test]
    fn test_dev_only_routing_flag() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let query = &catalog.categories["query"];

        assert!(query.is_dev_only("@tanstack/react-query-devtools"));
        assert!(!query.is_dev_only("@tanstack/react-query"));
    }

    #[test]
    fn test_package_names_cover_all_variants() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let names = catalog.categories["ui"].package_names();

        assert!(names.contains(&"@heroui/react"));
        assert!(names.contains(&"framer-motion"));

        let tailwind_names = catalog.tailwind_package_names();
        assert!(tailwind_names.contains(&"autoprefixer"));
        assert!(tailwind_names.contains(&"@tailwindcss/postcss"));
    }

    #[test]
    fn test_fallback_variant_when_version_absent() {
        let yaml = r#"
categories:
  demo:
    label: Demo
    packages:
      by_tailwind:
        v3:
          demo-pkg: "^1.0.0"
tailwind:
  v3:
    tailwindcss: "^3.4.17"
"#;
        let catalog: FeatureCatalog = serde_yaml::from_str(yaml).unwrap();
        let resolved = catalog.categories["demo"].resolve(TailwindVersion::V4);
        assert_eq!(resolved["demo-pkg"], "^1.0.0");

        let tailwind = catalog.tailwind_set(TailwindVersion::V4);
        assert_eq!(tailwind["tailwindcss"], "^3.4.17");
    }
}
