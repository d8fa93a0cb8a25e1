//! Command implementations.

pub mod check;
pub mod emit;
pub mod list_presets;
pub mod show;

use anyhow::{Context, Result};
use eslintrc_core::{ConfigDocument, Overrides};
use eslintrc_presets::Preset;
use std::path::{Path, PathBuf};

/// Project-local overrides file names, probed in this order.
const OVERRIDES_FILE_NAMES: [&str; 2] = ["eslintrc.toml", ".eslintrc.toml"];

/// Builds the effective document for a project: the preset, with local
/// overrides layered on when an overrides file is found. Also returns the
/// path of the overrides file that was applied, if any, so commands can
/// report it.
///
/// An explicit `--overrides` path always wins. Otherwise the project
/// directory is probed for `eslintrc.toml` and then the dotfile variant,
/// and finally `overrides.toml` in the global directory
/// (`$ESLINTRC_CONFIG_DIR`, or `~/.eslintrc`).
pub(crate) fn resolve_document(
    preset: Preset,
    dir: &Path,
    explicit: Option<&Path>,
) -> Result<(ConfigDocument, Option<PathBuf>)> {
    let doc = preset.document();

    let Some(path) = find_overrides(dir, explicit, global_overrides_dir().as_deref()) else {
        return Ok((doc, None));
    };
    tracing::debug!("Using overrides from {}", path.display());

    let overrides = Overrides::from_file(&path)
        .with_context(|| format!("Failed to load overrides: {}", path.display()))?;
    let merged = overrides
        .apply(&doc)
        .with_context(|| format!("Failed to apply overrides: {}", path.display()))?;
    merged
        .validate()
        .context("Overrides produced an inconsistent document")?;

    Ok((merged, Some(path)))
}

/// Walks the lookup order and returns the first overrides file that exists.
///
/// An explicit path is returned as-is without probing, so a typo in
/// `--overrides` fails loudly when the file is loaded instead of silently
/// falling back to another source. The global directory comes in as a
/// parameter; only `global_overrides_dir` reads the environment.
fn find_overrides(dir: &Path, explicit: Option<&Path>, global: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    OVERRIDES_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .chain(global.map(|g| g.join("overrides.toml")))
        .find(|candidate| candidate.is_file())
}

/// Directory holding machine-wide overrides.
fn global_overrides_dir() -> Option<PathBuf> {
    std::env::var_os("ESLINTRC_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".eslintrc")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn explicit_path_wins_over_project_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "eslintrc.toml", "");
        let flagged = write(tmp.path(), "custom.toml", "");

        let found = find_overrides(tmp.path(), Some(&flagged), None);
        assert_eq!(found, Some(flagged));
    }

    #[test]
    fn explicit_path_returned_even_when_missing() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");

        let found = find_overrides(tmp.path(), Some(&missing), None);
        assert_eq!(found, Some(missing));
    }

    #[test]
    fn plain_name_probed_before_dotfile() {
        let tmp = TempDir::new().unwrap();
        let plain = write(tmp.path(), "eslintrc.toml", "");
        write(tmp.path(), ".eslintrc.toml", "");

        let found = find_overrides(tmp.path(), None, None);
        assert_eq!(found, Some(plain));
    }

    #[test]
    fn project_file_wins_over_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let dotfile = write(project.path(), ".eslintrc.toml", "");
        write(global.path(), "overrides.toml", "");

        let found = find_overrides(project.path(), None, Some(global.path()));
        assert_eq!(found, Some(dotfile));
    }

    #[test]
    fn global_used_when_project_has_none() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let machine_wide = write(global.path(), "overrides.toml", "");

        let found = find_overrides(project.path(), None, Some(global.path()));
        assert_eq!(found, Some(machine_wide));
    }

    #[test]
    fn nothing_found_when_no_candidates_exist() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        assert_eq!(find_overrides(project.path(), None, Some(global.path())), None);
        assert_eq!(find_overrides(project.path(), None, None), None);
    }

    #[test]
    fn bare_preset_when_no_overrides_resolved() {
        let tmp = TempDir::new().unwrap();
        let (doc, used) = resolve_document(Preset::Base, tmp.path(), None).unwrap();
        assert_eq!(doc, Preset::Base.document());
        assert_eq!(used, None);
    }

    #[test]
    fn explicit_overrides_applied_and_reported() {
        let tmp = TempDir::new().unwrap();
        let path = write(tmp.path(), "custom.toml", "[rules]\n\"no-console\" = \"warn\"\n");

        let (doc, used) = resolve_document(Preset::Base, tmp.path(), Some(&path)).unwrap();
        assert!(doc.rules().contains("no-console"));
        assert_eq!(used, Some(path));
    }

    #[test]
    fn project_overrides_discovered_without_flag() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "eslintrc.toml", "[rules]\n\"no-console\" = \"off\"\n");

        let (doc, used) = resolve_document(Preset::React, tmp.path(), None).unwrap();
        assert!(doc.rules().contains("no-console"));
        assert_eq!(used, Some(tmp.path().join("eslintrc.toml")));
    }

    #[test]
    fn overrides_violating_shadow_invariant_rejected() {
        let tmp = TempDir::new().unwrap();
        // Re-enabling camelcase contradicts naming-convention.
        let path = write(tmp.path(), "custom.toml", "[rules]\n\"camelcase\" = \"error\"\n");

        let result = resolve_document(Preset::Base, tmp.path(), Some(&path));
        assert!(result.is_err());
    }
}
