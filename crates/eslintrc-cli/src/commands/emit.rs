//! Emit command implementation.

use anyhow::{bail, Context, Result};
use eslintrc_presets::Preset;
use std::path::Path;

/// File name the external lint engine loads.
const ENGINE_CONFIG_NAME: &str = ".eslintrc.json";

/// Runs the emit command.
pub fn run(dir: &Path, preset: Preset, overrides: Option<&Path>, force: bool) -> Result<()> {
    let target = dir.join(ENGINE_CONFIG_NAME);

    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    let (doc, applied) = super::resolve_document(preset, dir, overrides)?;
    let mut json = doc
        .to_json_pretty()
        .context("Failed to render document")?;
    json.push('\n');

    std::fs::write(&target, json)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("Created {} (preset: {})", target.display(), preset.name());
    if let Some(path) = applied {
        println!("Applied overrides from {}", path.display());
    }
    println!("\nNext steps:");
    println!("  1. Commit {ENGINE_CONFIG_NAME}");
    println!("  2. Run: eslintrc check --preset {}", preset.name());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eslintrc_core::ConfigDocument;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_engine_config() {
        let tmp = TempDir::new().unwrap();
        run(tmp.path(), Preset::Base, None, false).unwrap();

        let written = fs::read_to_string(tmp.path().join(".eslintrc.json")).unwrap();
        let doc = ConfigDocument::from_json(&written).unwrap();
        assert_eq!(doc, Preset::Base.document());
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".eslintrc.json"), "{}").unwrap();

        let result = run(tmp.path(), Preset::Base, None, false);
        assert!(result.is_err());

        // Untouched
        assert_eq!(
            fs::read_to_string(tmp.path().join(".eslintrc.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn force_overwrites() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".eslintrc.json"), "{}").unwrap();

        run(tmp.path(), Preset::React, None, true).unwrap();
        let written = fs::read_to_string(tmp.path().join(".eslintrc.json")).unwrap();
        let doc = ConfigDocument::from_json(&written).unwrap();
        assert_eq!(doc, Preset::React.document());
    }

    #[test]
    fn applies_explicit_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let overrides = tmp.path().join("team.toml");
        fs::write(&overrides, "[rules]\n\"no-console\" = \"warn\"\n").unwrap();

        run(tmp.path(), Preset::Base, Some(&overrides), false).unwrap();

        let written = fs::read_to_string(tmp.path().join(".eslintrc.json")).unwrap();
        let doc = ConfigDocument::from_json(&written).unwrap();
        assert!(doc.rules().contains("no-console"));
    }

    #[test]
    fn picks_up_project_overrides_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("eslintrc.toml"),
            "[rules]\n\"no-console\" = \"warn\"\n",
        )
        .unwrap();

        run(tmp.path(), Preset::Base, None, false).unwrap();

        let written = fs::read_to_string(tmp.path().join(".eslintrc.json")).unwrap();
        let doc = ConfigDocument::from_json(&written).unwrap();
        assert!(doc.rules().contains("no-console"));
    }
}
