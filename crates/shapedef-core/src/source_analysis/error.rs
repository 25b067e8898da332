// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical errors.
//!
//! Errors carry a [`SourcePos`] for precise diagnostics and integrate with
//! [`miette`] for rendering.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::SourcePos;

/// A lexical error encountered during scanning.
///
/// The scanner does not recover from these: the caller decides whether to
/// abandon the current input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(shapedef::lex))]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The position of the offending character.
    #[label("here")]
    pub pos: SourcePos,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, pos: SourcePos) -> Self {
        Self { kind, pos }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, pos: SourcePos) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), pos)
    }

    /// Creates an "unterminated string" error.
    #[must_use]
    pub fn unterminated_string(pos: SourcePos) -> Self {
        Self::new(LexErrorKind::UnterminatedString, pos)
    }

    /// Creates an "invalid escape" error.
    #[must_use]
    pub fn invalid_escape(c: char, pos: SourcePos) -> Self {
        Self::new(LexErrorKind::InvalidEscape(c), pos)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A string literal ran into a line end or the end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backslash followed by a character that is not a known escape.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
}
