//! Global stylesheet and Tailwind config materialization

use super::{MaterializeReport, PatchOutcome};
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

const GLOBALS: &str = "src/app/globals.css";
const GLOBALS_V3_VARIANT: &str = "src/app/globals.v3.css";
const CONFIG_V3_VARIANT: &str = "tailwind.config.v3.js";
const CONFIG_FILE: &str = "tailwind.config.js";

/// The legacy three-directive form that v4 replaces
const LEGACY_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;";

/// v4 unified import plus companion plugin/source directives
const UNIFIED_IMPORT: &str = "@import 'tailwindcss';\n@plugin 'tailwindcss-animate';\n@source '../../node_modules/@heroui/theme/dist/**/*.{js,ts,jsx,tsx}';";

/// Marker guarding against duplicate theme-block insertion on re-runs
const THEME_MARKER: &str = "@theme";

const THEME_BLOCK: &str = r#"
@theme inline {
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-muted: var(--muted);
  --color-muted-foreground: var(--muted-foreground);
  --color-border: var(--border);
  --color-ring: var(--ring);
  --font-inter: var(--font-inter);
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
}
"#;

/// Fallback v3 config, synthesized when the template ships no static variant.
/// Mirrors the template's committed config minus the HeroUI plugin wiring.
const DEFAULT_CONFIG_V3: &str = r#"/** @type {import('tailwindcss').Config} */

import tailwindAnimate from 'tailwindcss-animate';

export const darkMode = ['class'];
export const content = [
  './src/**/*.{js,jsx,ts,tsx}',
  './node_modules/@heroui/theme/dist/**/*.{js,ts,jsx,tsx}',
];
export const theme = {
  container: {
    center: true,
    padding: '2rem',
    screens: {
      '2xl': '1440px',
    },
  },
  extend: {
    fontFamily: {
      inter: 'var(--font-inter)',
    },
    colors: {
      border: 'hsl(var(--border))',
      background: 'hsl(var(--background))',
      foreground: 'hsl(var(--foreground))',
      primary: {
        DEFAULT: 'hsl(var(--primary))',
        foreground: 'hsl(var(--primary-foreground))',
      },
      secondary: {
        DEFAULT: 'hsl(var(--secondary))',
        foreground: 'hsl(var(--secondary-foreground))',
      },
    },
    borderRadius: {
      lg: 'var(--radius)',
      md: 'calc(var(--radius) - 2px)',
      sm: 'calc(var(--radius) - 4px)',
    },
  },
};

export const plugins = [tailwindAnimate];
"#;

/// Replace the legacy directive triplet with the unified v4 import.
/// Pure; returns the new content and whether the anchor was found.
pub fn rewrite_imports(content: &str) -> (String, PatchOutcome) {
    if content.contains(LEGACY_DIRECTIVES) {
        (
            content.replacen(LEGACY_DIRECTIVES, UNIFIED_IMPORT, 1),
            PatchOutcome::Applied,
        )
    } else {
        (content.to_string(), PatchOutcome::Skipped)
    }
}

/// Append the theme-variable block unless one is already present
pub fn append_theme_block(content: &str) -> (String, PatchOutcome) {
    if content.contains(THEME_MARKER) {
        return (content.to_string(), PatchOutcome::Skipped);
    }
    let mut out = content.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(THEME_BLOCK);
    (out, PatchOutcome::Applied)
}

/// v3 materialization: static config variant (or synthesized default) plus
/// the legacy stylesheet variant when the template carries one.
pub async fn materialize_v3(project_dir: &Path, report: &mut MaterializeReport) -> Result<()> {
    let variant = project_dir.join(CONFIG_V3_VARIANT);
    let config = project_dir.join(CONFIG_FILE);
    if variant.is_file() {
        fs::copy(&variant, &config)
            .await
            .with_context(|| format!("Failed to write {}", config.display()))?;
        report.record("tailwind-config", PatchOutcome::Applied);
    } else {
        fs::write(&config, DEFAULT_CONFIG_V3)
            .await
            .with_context(|| format!("Failed to write {}", config.display()))?;
        report.record("tailwind-config-default", PatchOutcome::Applied);
    }

    let globals_variant = project_dir.join(GLOBALS_V3_VARIANT);
    if globals_variant.is_file() {
        fs::copy(&globals_variant, project_dir.join(GLOBALS))
            .await
            .context("Failed to replace global stylesheet")?;
        report.record("globals-v3-variant", PatchOutcome::Applied);
    } else {
        report.record("globals-v3-variant", PatchOutcome::Skipped);
    }

    Ok(())
}

/// v4 materialization: rewrite the global stylesheet in place
pub async fn materialize_v4(project_dir: &Path, report: &mut MaterializeReport) -> Result<()> {
    let path = project_dir.join(GLOBALS);
    if !path.is_file() {
        return Err(ScaffoldError::StylesheetMissing(path).into());
    }
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (content, imports) = rewrite_imports(&content);
    report.record("stylesheet-import", imports);

    let (content, theme) = append_theme_block(&content);
    report.record("stylesheet-theme", theme);

    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
