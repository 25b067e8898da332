// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and every error carries a [`SourcePos`] naming the source it
//! came from and the line/column inside it. Definition files are small and
//! errors are reported to humans, so positions are line based; the byte
//! offset is kept alongside for diagnostic rendering.

use std::fmt;

use ecow::EcoString;

/// A location in a named source.
///
/// Lines and columns are 1-based. The column is optional so that callers
/// which only know the line (for example, a whole-line diagnostic) can still
/// build a position.
///
/// # Examples
///
/// ```
/// use shapedef_core::source_analysis::SourcePos;
///
/// let pos = SourcePos::new("standard.def", 3, Some(7), 42);
/// assert_eq!(pos.line(), 3);
/// assert_eq!(pos.column(), Some(7));
/// assert_eq!(pos.to_string(), "standard.def:3:7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourcePos {
    source_id: EcoString,
    line: u32,
    column: Option<u32>,
    offset: u32,
}

impl SourcePos {
    /// Creates a new position.
    #[must_use]
    pub fn new(source_id: impl Into<EcoString>, line: u32, column: Option<u32>, offset: u32) -> Self {
        Self {
            source_id: source_id.into(),
            line,
            column,
            offset,
        }
    }

    /// Returns the identifier of the source (usually a file path).
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Returns the 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column, if known.
    #[must_use]
    pub const fn column(&self) -> Option<u32> {
        self.column
    }

    /// Returns the byte offset of the position in the source text.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}:{column}", self.source_id, self.line),
            None => write!(f, "{}:{}", self.source_id, self.line),
        }
    }
}

impl From<SourcePos> for miette::SourceSpan {
    fn from(pos: SourcePos) -> Self {
        (pos.offset as usize, 0).into()
    }
}

/// One character read from a [`TextSource`](super::TextSource) together with
/// its position.
///
/// The NUL character ([`SourceChar::END`]) is the end-of-input sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChar {
    ch: char,
    pos: SourcePos,
}

impl SourceChar {
    /// The sentinel returned once a source is exhausted.
    pub const END: char = '\0';

    /// Creates a new source character.
    #[must_use]
    pub const fn new(ch: char, pos: SourcePos) -> Self {
        Self { ch, pos }
    }

    /// Returns the character.
    #[must_use]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Returns the position of the character.
    #[must_use]
    pub const fn pos(&self) -> &SourcePos {
        &self.pos
    }

    /// Consumes the character and returns its position.
    #[must_use]
    pub fn into_pos(self) -> SourcePos {
        self.pos
    }

    /// Returns `true` for the end-of-input sentinel.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.ch == Self::END
    }

    /// Returns `true` for a line-feed or carriage-return.
    #[must_use]
    pub const fn is_line_terminator(&self) -> bool {
        matches!(self.ch, '\n' | '\r')
    }
}
