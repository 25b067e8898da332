// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use shapedef_core::definition::{Definitions, parse_definitions};
use std::fs;
use tracing::debug;

use crate::diagnostic::DefinitionDiagnostic;

pub mod check;
pub mod discovery;
pub mod list;
pub mod manifest;

/// Read and parse one definition file.
///
/// A parse failure is returned as a [`DefinitionDiagnostic`] carrying the
/// file's source, so the report shows the offending line.
pub fn parse_file(path: &Utf8Path) -> Result<Definitions> {
    let source = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{path}'"))?;
    debug!(%path, bytes = source.len(), "Parsing definition file");

    parse_definitions(path.as_str(), source.as_str())
        .map_err(|err| DefinitionDiagnostic::from_parse_error(&err, path.as_str(), &source).into())
}
