//! package.json rewriting
//!
//! The rewrite itself is a pure function from (base document, selection,
//! catalog) to a new document, so the idempotence and purge guarantees are
//! testable without touching disk. Key order is preserved (`serde_json` with
//! `preserve_order`), which keeps diffs against the template manifest small.

use crate::catalog::FeatureCatalog;
use crate::error::ScaffoldError;
use crate::selection::Selection;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::path::Path;
use tokio::fs;

/// Fields that only make sense for the template package itself
const GENERATOR_FIELDS: &[&str] = &["bin", "keywords", "repository", "bugs", "homepage"];

const DEPS: &str = "dependencies";
const DEV_DEPS: &str = "devDependencies";

/// Rewrite the template manifest to reflect the selection.
///
/// Steps, in order:
/// 1. identity fields set, generator-only fields removed
/// 2. every Tailwind package purged from both maps, the chosen version's set
///    inserted into devDependencies
/// 3. every catalog package purged from both maps
/// 4. each accepted category's version-resolved set inserted, dev-only
///    packages routed to devDependencies
///
/// Running this twice with the same selection yields an identical document.
pub fn rewrite_manifest(
    base: &Value,
    selection: &Selection,
    catalog: &FeatureCatalog,
) -> Result<Value> {
    let mut doc = base
        .as_object()
        .cloned()
        .context("package.json root is not an object")?;

    // Step 1: identity
    doc.insert("name".to_string(), json!(selection.project_name));
    doc.insert("version".to_string(), json!("0.1.0"));
    doc.insert("private".to_string(), json!(true));
    doc.insert(
        "description".to_string(),
        json!(format!("A Next.js application: {}", selection.project_name)),
    );
    for field in GENERATOR_FIELDS {
        doc.shift_remove(*field);
    }

    // Step 2: Tailwind packages
    for name in catalog.tailwind_package_names() {
        remove_package(&mut doc, name);
    }
    for (name, version) in catalog.tailwind_set(selection.tailwind) {
        insert_package(&mut doc, DEV_DEPS, &name, &version);
    }

    // Step 3: purge every catalog package, selected or not
    for category in catalog.categories.values() {
        for name in category.package_names() {
            remove_package(&mut doc, name);
        }
    }

    // Step 4: re-add the accepted categories
    for (category_name, category) in &catalog.categories {
        if !selection.wants(category_name) {
            continue;
        }
        for (name, version) in category.resolve(selection.tailwind) {
            let target = if category.is_dev_only(&name) { DEV_DEPS } else { DEPS };
            insert_package(&mut doc, target, &name, &version);
        }
    }

    Ok(Value::Object(doc))
}

/// Remove a package from both dependency maps. Absent keys are a no-op.
fn remove_package(doc: &mut Map<String, Value>, name: &str) {
    for section in [DEPS, DEV_DEPS] {
        if let Some(Value::Object(deps)) = doc.get_mut(section) {
            deps.shift_remove(name);
        }
    }
}

fn insert_package(doc: &mut Map<String, Value>, section: &str, name: &str, version: &str) {
    let slot = doc
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(deps) = slot {
        deps.insert(name.to_string(), json!(version));
    }
}

/// Read, rewrite, and write back the destination's package.json.
///
/// A malformed manifest is fatal and aborts the run before any other file in
/// the destination is touched.
pub async fn rewrite_manifest_file(
    project_dir: &Path,
    selection: &Selection,
    catalog: &FeatureCatalog,
) -> Result<()> {
    let path = project_dir.join("package.json");
    let raw = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let base: Value = serde_json::from_str(&raw).map_err(|source| ScaffoldError::ManifestParse {
        path: path.clone(),
        source,
    })?;

    let rewritten = rewrite_manifest(&base, selection, catalog)?;

    // npm-style output: two-space indent, trailing newline
    let mut out = serde_json::to_string_pretty(&rewritten)?;
    out.push('\n');
    fs::write(&path, out)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::TailwindVersion;

    fn template_manifest() -> Value {
        json!({
            "name": "create-next-starter-template",
            "version": "1.4.2",
            "bin": { "create-next-starter": "bin/create-template.js" },
            "keywords": ["nextjs", "template", "starter"],
            "repository": { "type": "git", "url": "https://example.com/starter.git" },
            "homepage": "https://example.com",
            "bugs": "https://example.com/issues",
            "scripts": { "dev": "next dev", "build": "next build" },
            "dependencies": {
                "next": "15.1.0",
                "react": "^19.0.0",
                "react-dom": "^19.0.0",
                "@heroui/react": "^2.6.14",
                "framer-motion": "^11.18.2",
                "@tanstack/react-query": "^5.85.5",
                "lucide-react": "^0.540.0",
                "zustand": "^5.0.7"
            },
            "devDependencies": {
                "typescript": "^5",
                "tailwindcss": "^3.4.17",
                "postcss": "^8.5.6",
                "autoprefixer": "^10.4.21",
                "@tanstack/react-query-devtools": "^5.85.5"
            }
        })
    }

    fn selection(tailwind: TailwindVersion, accepted: &[&str]) -> Selection {
        let mut selection = Selection::new("demo");
        selection.tailwind = tailwind;
        for category in accepted {
            selection.features.insert(category.to_string(), true);
        }
        selection
    }

    fn deps<'a>(doc: &'a Value, section: &str) -> &'a Map<String, Value> {
        doc[section].as_object().expect("section is an object")
    }

    #[test]
    fn test_identity_fields_rewritten() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let doc = rewrite_manifest(&template_manifest(), &selection(TailwindVersion::V4, &[]), &catalog)
            .unwrap();

        assert_eq!(doc["name"], "demo");
        assert_eq!(doc["version"], "0.1.0");
        assert_eq!(doc["private"], true);
        for field in GENERATOR_FIELDS {
            assert!(doc.get(*field).is_none(), "{} should be removed", field);
        }
        // non-generator fields survive
        assert_eq!(doc["scripts"]["dev"], "next dev");
    }

    #[test]
    fn test_declined_categories_fully_purged() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let doc = rewrite_manifest(&template_manifest(), &selection(TailwindVersion::V4, &[]), &catalog)
            .unwrap();

        for category in catalog.categories.values() {
            for name in category.package_names() {
                assert!(deps(&doc, DEPS).get(name).is_none(), "{} left in deps", name);
                assert!(
                    deps(&doc, DEV_DEPS).get(name).is_none(),
                    "{} left in devDeps",
                    name
                );
            }
        }
        // template packages unrelated to the catalog are untouched
        assert_eq!(deps(&doc, DEPS)["next"], "15.1.0");
    }

    #[test]
    fn test_tailwind_set_replaced_per_version() {
        let catalog = FeatureCatalog::builtin().unwrap();

        let v4 = rewrite_manifest(&template_manifest(), &selection(TailwindVersion::V4, &[]), &catalog)
            .unwrap();
        assert_eq!(deps(&v4, DEV_DEPS)["tailwindcss"], "^4.1.11");
        assert!(deps(&v4, DEV_DEPS).get("autoprefixer").is_none());
        assert!(deps(&v4, DEV_DEPS).get("@tailwindcss/postcss").is_some());

        let v3 = rewrite_manifest(&template_manifest(), &selection(TailwindVersion::V3, &[]), &catalog)
            .unwrap();
        assert_eq!(deps(&v3, DEV_DEPS)["tailwindcss"], "^3.4.17");
        assert!(deps(&v3, DEV_DEPS).get("@tailwindcss/postcss").is_none());
        assert!(deps(&v3, DEV_DEPS).get("autoprefixer").is_some());
    }

    #[test]
    fn test_accepted_category_version_resolved() {
        let catalog = FeatureCatalog::builtin().unwrap();

        let doc = rewrite_manifest(
            &template_manifest(),
            &selection(TailwindVersion::V3, &["ui"]),
            &catalog,
        )
        .unwrap();
        assert_eq!(deps(&doc, DEPS)["@heroui/react"], "^2.6.14");

        let doc = rewrite_manifest(
            &template_manifest(),
            &selection(TailwindVersion::V4, &["ui"]),
            &catalog,
        )
        .unwrap();
        assert_eq!(deps(&doc, DEPS)["@heroui/react"], "^2.8.4");
    }

    #[test]
    fn test_dev_only_packages_routed_to_dev_dependencies() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let doc = rewrite_manifest(
            &template_manifest(),
            &selection(TailwindVersion::V4, &["query"]),
            &catalog,
        )
        .unwrap();

        assert!(deps(&doc, DEPS).get("@tanstack/react-query").is_some());
        assert!(deps(&doc, DEPS).get("@tanstack/react-query-devtools").is_none());
        assert!(deps(&doc, DEV_DEPS)
            .get("@tanstack/react-query-devtools")
            .is_some());
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let selection = selection(TailwindVersion::V4, &["ui", "query", "icons"]);

        let once = rewrite_manifest(&template_manifest(), &selection, &catalog).unwrap();
        let twice = rewrite_manifest(&once, &selection, &catalog).unwrap();

        assert_eq!(
            serde_json::to_string_pretty(&once).unwrap(),
            serde_json::to_string_pretty(&twice).unwrap()
        );
    }

    #[test]
    fn test_unknown_selection_category_ignored() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let mut selection = selection(TailwindVersion::V4, &[]);
        selection.features.insert("monitoring".to_string(), true);

        let doc = rewrite_manifest(&template_manifest(), &selection, &catalog).unwrap();
        // nothing inserted for a category the catalog doesn't know
        assert!(deps(&doc, DEPS).get("monitoring").is_none());
    }

    #[test]
    fn test_missing_dependency_sections_created() {
        let catalog = FeatureCatalog::builtin().unwrap();
        let bare = json!({ "name": "bare", "version": "1.0.0" });

        let doc = rewrite_manifest(&bare, &selection(TailwindVersion::V4, &["state"]), &catalog)
            .unwrap();
        assert!(deps(&doc, DEV_DEPS).get("tailwindcss").is_some());
        assert_eq!(deps(&doc, DEPS)["zustand"], "^5.0.7");
    }
}
