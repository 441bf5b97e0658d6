//! Targeted text patching of next.config.ts for Tailwind v4
//!
//! The template's build config predates v4, so the generator inserts the
//! PostCSS plugin import and its webpack registration by anchor matching.
//! Unrecognized anchors skip the patch rather than failing the run; the
//! outcome is reported so the caller can surface the skip.

use super::{MaterializeReport, PatchOutcome};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

const NEXT_CONFIG: &str = "next.config.ts";

/// Recognized import-statement forms, checked in order. The inserted import
/// lands immediately after the first match.
const IMPORT_ANCHORS: &[&str] = &[
    "import { NextConfig, SizeLimit } from 'next';",
    "import type { NextConfig } from 'next';",
    "import { NextConfig } from 'next';",
];

const IMPORT_LINE: &str = "import tailwindcss from '@tailwindcss/postcss';";

/// Recognized webpack-hook heads, checked in order
const HOOK_ANCHORS: &[&str] = &[
    "webpack: (config, { dev, isServer }) => {",
    "webpack: (config) => {",
];

const HOOK_LINE: &str = "    config.plugins = [...(config.plugins || []), tailwindcss()];";

/// Insert `line` on its own line directly after the first anchor found
fn insert_after_anchor(content: &str, anchors: &[&str], line: &str) -> (String, PatchOutcome) {
    if content.contains(line) {
        // already patched on a previous run
        return (content.to_string(), PatchOutcome::Skipped);
    }
    for anchor in anchors {
        if let Some(pos) = content.find(anchor) {
            let insert_at = pos + anchor.len();
            let mut out = String::with_capacity(content.len() + line.len() + 1);
            out.push_str(&content[..insert_at]);
            out.push('\n');
            out.push_str(line);
            out.push_str(&content[insert_at..]);
            return (out, PatchOutcome::Applied);
        }
    }
    (content.to_string(), PatchOutcome::Skipped)
}

pub fn patch_import(content: &str) -> (String, PatchOutcome) {
    insert_after_anchor(content, IMPORT_ANCHORS, IMPORT_LINE)
}

pub fn patch_webpack_hook(content: &str) -> (String, PatchOutcome) {
    insert_after_anchor(content, HOOK_ANCHORS, HOOK_LINE)
}

/// Patch the destination's next.config.ts in place
pub async fn patch(project_dir: &Path, report: &mut MaterializeReport) -> Result<()> {
    let path = project_dir.join(NEXT_CONFIG);
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (content, import) = patch_import(&content);
    report.record("next-config-import", import);

    let (content, hook) = patch_webpack_hook(&content);
    report.record("next-config-webpack", hook);

    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
