// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Locating definition files.
//!
//! Paths given on the command line win; otherwise the paths from
//! `shapedef.toml` are used, relative to the project root. Directories are
//! searched recursively and symlinks are never followed.

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use std::fs;
use tracing::debug;

use super::manifest::{DefinitionsConfig, find_manifest};

/// Returns the current working directory as a UTF-8 path.
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("Failed to determine the current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| miette::miette!("Non-UTF-8 current directory"))
}

/// Resolves the definition files to process from command-line paths and the
/// manifest in `project_root`.
pub fn resolve_definition_files(
    cli_paths: &[String],
    project_root: &Utf8Path,
) -> Result<Vec<Utf8PathBuf>> {
    let config = find_manifest(project_root)?
        .map(|manifest| manifest.definitions)
        .unwrap_or_default();

    let paths: Vec<Utf8PathBuf> = if cli_paths.is_empty() {
        config.paths.iter().map(|path| project_root.join(path)).collect()
    } else {
        cli_paths.iter().map(Utf8PathBuf::from).collect()
    };
    debug!(?paths, extension = %config.extension, "Resolving definition files");

    find_definition_files(&paths, &config)
}

/// Collects every definition file under `paths`.
///
/// An explicit file must carry the configured extension. The result keeps
/// the order of `paths`, with each directory's files sorted, and lists a
/// file reachable through several paths once.
pub fn find_definition_files(
    paths: &[Utf8PathBuf],
    config: &DefinitionsConfig,
) -> Result<Vec<Utf8PathBuf>> {
    let extension = config.extension.as_str();
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if path.extension() == Some(extension) {
                files.push(path.clone());
            } else {
                miette::bail!("File '{}' is not a .{} definition file", path, extension);
            }
        } else if path.is_dir() {
            let mut found = Vec::new();
            collect_definition_files_recursive(path, extension, &mut found)?;
            found.sort();
            files.extend(found);
        } else {
            miette::bail!("Path '{}' does not exist", path);
        }
    }

    let mut seen = std::collections::HashSet::new();
    files.retain(|file| seen.insert(file.clone()));
    Ok(files)
}

fn collect_definition_files_recursive(
    dir: &Utf8Path,
    extension: &str,
    files: &mut Vec<Utf8PathBuf>,
) -> Result<()> {
    for entry in fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read directory '{dir}'"))?
    {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|_| miette::miette!("Non-UTF-8 path"))?;

        if file_type.is_dir() {
            collect_definition_files_recursive(&entry_path, extension, files)?;
        } else if file_type.is_file() && entry_path.extension() == Some(extension) {
            files.push(entry_path);
        }
    }
    Ok(())
}
