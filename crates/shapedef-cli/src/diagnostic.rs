// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Definition file errors rendered with miette.
//!
//! Converts a [`ParseError`] into a report that shows the offending source
//! line with an arrow under the token the parser stopped at.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use shapedef_core::definition::ParseError;

/// A definition file that failed to parse.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(shapedef::check))]
pub struct DefinitionDiagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
}

impl DefinitionDiagnostic {
    /// Create a new diagnostic from a parse error in `source`.
    pub fn from_parse_error(err: &ParseError, source_path: &str, source: &str) -> Self {
        let label = match err {
            ParseError::Lex(_) => "invalid token",
            ParseError::Grammar(_) => "here",
        };

        let offset = usize::try_from(err.pos().offset())
            .unwrap_or(source.len())
            .min(source.len());
        // Underline the character at the error, or nothing at end of input.
        let len = source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);

        Self {
            message: err.message(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: (offset, len).into(),
            label: label.to_string(),
        }
    }
}
