// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Project configuration parsing.
//!
//! A `shapedef.toml` in the working directory tells the CLI where definition
//! files live when no paths are given on the command line:
//!
//! ```toml
//! [definitions]
//! paths = ["icons", "toolbars"]
//! extension = "def"
//! ```

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use std::fs;

/// File name looked up in the project root.
pub const MANIFEST_FILE: &str = "shapedef.toml";

/// The top-level structure parsed from `shapedef.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// The `[definitions]` section; every field has a default.
    #[serde(default)]
    pub definitions: DefinitionsConfig,
}

/// Where to look for definition files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionsConfig {
    /// Files or directories, relative to the project root.
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
    /// File extension (without the dot) that marks a definition file.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            extension: default_extension(),
        }
    }
}

fn default_paths() -> Vec<String> {
    vec![".".to_string()]
}

fn default_extension() -> String {
    "def".to_string()
}

/// Parse a `shapedef.toml` file.
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// contains keys this tool does not know.
pub fn parse_manifest(path: &Utf8Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read manifest '{path}'"))?;

    let manifest: Manifest = toml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse manifest '{path}'"))?;

    if manifest.definitions.extension.is_empty() {
        miette::bail!("Manifest '{path}' has an empty definitions extension");
    }
    Ok(manifest)
}

/// Look for `shapedef.toml` in the given directory and parse it if found.
///
/// Returns `None` if no manifest file exists. Returns an error if the file
/// exists but is malformed.
pub fn find_manifest(project_root: &Utf8Path) -> Result<Option<Manifest>> {
    let manifest_path = project_root.join(MANIFEST_FILE);
    if manifest_path
        .try_exists()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to stat manifest '{manifest_path}'"))?
    {
        parse_manifest(&manifest_path).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(path.join(MANIFEST_FILE), content).unwrap();
        path
    }

    #[test]
    fn test_parse_full_manifest() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(
            &temp,
            r#"
[definitions]
paths = ["icons", "toolbars/std.shapes"]
extension = "shapes"
"#,
        );

        let manifest = parse_manifest(&root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.definitions.paths, vec!["icons", "toolbars/std.shapes"]);
        assert_eq!(manifest.definitions.extension, "shapes");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "[definitions]\npaths = [\"icons\"]\n");

        let manifest = parse_manifest(&root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.definitions.paths, vec!["icons"]);
        assert_eq!(manifest.definitions.extension, "def");
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "");

        let manifest = parse_manifest(&root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.definitions, DefinitionsConfig::default());
        assert_eq!(manifest.definitions.paths, vec!["."]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "[definitions]\nextensions = \"def\"\n");

        let err = format!("{:?}", parse_manifest(&root.join(MANIFEST_FILE)).unwrap_err());
        assert!(err.contains(MANIFEST_FILE), "error should mention file: {err}");
    }

    #[test]
    fn test_empty_extension_rejected() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "[definitions]\nextension = \"\"\n");

        assert!(parse_manifest(&root.join(MANIFEST_FILE)).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "this is not valid toml {{{{");

        assert!(parse_manifest(&root.join(MANIFEST_FILE)).is_err());
    }

    #[test]
    fn test_find_manifest_present() {
        let temp = TempDir::new().unwrap();
        let root = write_manifest(&temp, "[definitions]\nextension = \"icons\"\n");

        let manifest = find_manifest(&root).unwrap().expect("manifest found");
        assert_eq!(manifest.definitions.extension, "icons");
    }

    #[test]
    fn test_find_manifest_absent() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        assert!(find_manifest(&root).unwrap().is_none());
    }
}
