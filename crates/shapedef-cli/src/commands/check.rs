// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Check definition files for errors.
//!
//! Every file is parsed independently; a failure is reported and checking
//! moves on to the next file.

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Report, Result};
use tracing::{info, instrument, warn};

use super::discovery::{current_dir, resolve_definition_files};
use super::parse_file;

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files parsed.
    pub checked: usize,
    /// Files that failed.
    pub failed: usize,
}

/// Check the definition files under `paths`.
#[instrument(skip_all, fields(paths = ?paths))]
pub fn check(paths: &[String]) -> Result<()> {
    let root = current_dir()?;
    let files = resolve_definition_files(paths, &root)?;
    if files.is_empty() {
        miette::bail!("No definition files found");
    }

    let summary = check_files(&files, |_, report| eprintln!("{report:?}"));
    if summary.failed > 0 {
        miette::bail!(
            "{} of {} definition files failed to parse",
            summary.failed,
            summary.checked
        );
    }

    println!("Checked {} definition files", summary.checked);
    Ok(())
}

/// Parse every file in `files`, passing each failure to `report`.
pub fn check_files<F>(files: &[Utf8PathBuf], mut report: F) -> CheckSummary
where
    F: FnMut(&Utf8Path, Report),
{
    let mut failed = 0;
    for file in files {
        match parse_file(file) {
            Ok(definitions) => info!(
                path = %file,
                icons = definitions.icons.len(),
                toolbars = definitions.toolbars.len(),
                "Definition file ok"
            ),
            Err(err) => {
                warn!(path = %file, error = %err, "Definition file failed");
                failed += 1;
                report(file, err);
            }
        }
    }
    CheckSummary {
        checked: files.len(),
        failed,
    }
}
