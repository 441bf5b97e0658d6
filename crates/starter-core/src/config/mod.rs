//! Styling-framework configuration materialization
//!
//! Produces exactly one active Tailwind configuration variant per run:
//! v3 (config file + PostCSS plugins + legacy stylesheet) or v4 (CSS-first
//! stylesheet rewrite + next.config patch + v4 PostCSS config).

pub mod next_config;
pub mod stylesheet;

use crate::selection::{Selection, TailwindVersion};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Result of one text patch against an existing file.
///
/// Text-pattern patching degrades gracefully: a missing anchor is a skip,
/// not an error, but callers get to see which patches landed so tests and
/// the wizard can tell "nothing to do" from "anchor format changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    Skipped,
}

impl PatchOutcome {
    pub fn applied(self) -> bool {
        matches!(self, PatchOutcome::Applied)
    }
}

/// Per-patch outcomes for one materialization run
#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub patches: Vec<(&'static str, PatchOutcome)>,
}

impl MaterializeReport {
    pub fn record(&mut self, name: &'static str, outcome: PatchOutcome) {
        self.patches.push((name, outcome));
    }

    /// Names of patches that found no anchor
    pub fn skipped(&self) -> Vec<&'static str> {
        self.patches
            .iter()
            .filter(|(_, outcome)| !outcome.applied())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// v3 PostCSS pipeline: tailwindcss + autoprefixer plugins
const POSTCSS_V3: &str = "const config = {\n  plugins: {\n    tailwindcss: {},\n    autoprefixer: {},\n  },\n};\n\nexport default config;\n";

/// v4 PostCSS pipeline: the single @tailwindcss/postcss plugin
const POSTCSS_V4: &str =
    "const config = {\n  plugins: [\"@tailwindcss/postcss\"],\n};\n\nexport default config;\n";

/// Write the Tailwind configuration matching the chosen version into the
/// destination project.
pub async fn materialize(project_dir: &Path, selection: &Selection) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    match selection.tailwind {
        TailwindVersion::V3 => {
            stylesheet::materialize_v3(project_dir, &mut report).await?;
            write_postcss(project_dir, POSTCSS_V3).await?;
        }
        TailwindVersion::V4 => {
            stylesheet::materialize_v4(project_dir, &mut report).await?;
            next_config::patch(project_dir, &mut report).await?;
            // overwrites any v3 pipeline config left by the template
            write_postcss(project_dir, POSTCSS_V4).await?;
        }
    }

    Ok(report)
}

async fn write_postcss(project_dir: &Path, content: &str) -> Result<()> {
    let path = project_dir.join("postcss.config.mjs");
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_tracks_skips() {
        let mut report = MaterializeReport::default();
        report.record("stylesheet-import", PatchOutcome::Applied);
        report.record("next-config-import", PatchOutcome::Skipped);

        assert_eq!(report.skipped(), vec!["next-config-import"]);
        assert!(PatchOutcome::Applied.applied());
        assert!(!PatchOutcome::Skipped.applied());
    }
}
