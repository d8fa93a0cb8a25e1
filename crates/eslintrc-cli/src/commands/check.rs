//! Check command implementation.

use anyhow::{Context, Result};
use eslintrc_core::{diff, ConfigDocument, Drift};
use eslintrc_presets::Preset;
use std::path::Path;

/// Runs the check command.
///
/// Loads the project's `.eslintrc.json`, builds the expected document
/// (preset plus overrides), and reports every drift finding. Exits with a
/// non-zero status when the documents differ.
pub fn run(dir: &Path, preset: Preset, overrides: Option<&Path>) -> Result<()> {
    let target = dir.join(".eslintrc.json");
    let actual = ConfigDocument::from_json_file(&target)
        .with_context(|| format!("Failed to load {}", target.display()))?;

    let (expected, _) = super::resolve_document(preset, dir, overrides)?;
    let findings = check_drift(&expected, &actual);

    for finding in &findings {
        println!("drift: {finding}");
    }

    if findings.is_empty() {
        println!(
            "{} matches the {} preset",
            target.display(),
            preset.name()
        );
        Ok(())
    } else {
        println!(
            "\nFound {} difference(s) against the {} preset",
            findings.len(),
            preset.name()
        );
        println!("Regenerate with: eslintrc emit --force --preset {}", preset.name());
        std::process::exit(1);
    }
}

/// Testable core: compares without touching the process exit code.
fn check_drift(expected: &ConfigDocument, actual: &ConfigDocument) -> Vec<Drift> {
    diff(expected, actual)
}
