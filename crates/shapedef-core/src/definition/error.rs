// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Grammar errors and the unified parse error.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::source_analysis::{LexError, SourcePos};

/// A well-formed token in the wrong place, a missing required property, or
/// an invalid property value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(shapedef::grammar))]
pub struct GrammarError {
    /// Human-readable description.
    pub message: EcoString,
    /// Where the problem was found.
    #[label("here")]
    pub pos: SourcePos,
}

impl GrammarError {
    /// Creates a new grammar error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, pos: SourcePos) -> Self {
        Self {
            message: message.into(),
            pos,
        }
    }
}

/// Any error that stops the parsing of a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The scanner could not form a token.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    /// The tokens do not form a valid definition.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),
}

impl ParseError {
    /// Returns the position of the error.
    #[must_use]
    pub const fn pos(&self) -> &SourcePos {
        match self {
            Self::Lex(err) => &err.pos,
            Self::Grammar(err) => &err.pos,
        }
    }

    /// Returns the error message without the position.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lex(err) => err.kind.to_string(),
            Self::Grammar(err) => err.message.to_string(),
        }
    }
}
