// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Character sources for the scanner.
//!
//! A [`TextSource`] is a cursor over characters that knows where each
//! character came from. The scanner never looks ahead in a source; it reads
//! one character at a time and keeps its own pushback stack.

use ecow::EcoString;

use super::{SourceChar, SourcePos};

/// A stream of characters with positions.
///
/// Once the text is exhausted, every further call returns
/// [`SourceChar::END`] at the same position. There is no other end signal:
/// callers test the character value.
pub trait TextSource {
    /// Returns the next character and advances the cursor.
    fn read_next_char(&mut self) -> SourceChar;
}

/// A [`TextSource`] over an in-memory string.
///
/// A NUL character in the text is read as U+FFFD so that it cannot be
/// mistaken for [`SourceChar::END`]; the scanner then rejects it as an
/// unexpected character. `\n`, `\r\n` and a lone `\r` each start a new line.
///
/// # Examples
///
/// ```
/// use shapedef_core::source_analysis::{StringSource, TextSource};
///
/// let mut source = StringSource::new("inline", "a\nb");
/// assert_eq!(source.read_next_char().ch(), 'a');
/// assert_eq!(source.read_next_char().ch(), '\n');
/// let b = source.read_next_char();
/// assert_eq!((b.pos().line(), b.pos().column()), (2, Some(1)));
/// assert!(source.read_next_char().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct StringSource {
    source_id: EcoString,
    text: String,
    /// Byte index of the next character.
    index: usize,
    line: u32,
    column: u32,
}

impl StringSource {
    /// Creates a source named `source_id` over `text`.
    #[must_use]
    pub fn new(source_id: impl Into<EcoString>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "definition files over 4GB are not supported"
    )]
    fn current_pos(&self) -> SourcePos {
        SourcePos::new(
            self.source_id.clone(),
            self.line,
            Some(self.column),
            self.index as u32,
        )
    }
}

impl TextSource for StringSource {
    fn read_next_char(&mut self) -> SourceChar {
        let pos = self.current_pos();
        let Some(ch) = self.text[self.index..].chars().next() else {
            return SourceChar::new(SourceChar::END, pos);
        };
        self.index += ch.len_utf8();
        let ends_line = match ch {
            '\n' => true,
            // The `\n` of a `\r\n` pair ends the line instead.
            '\r' => !self.text[self.index..].starts_with('\n'),
            _ => false,
        };
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        let ch = if ch == SourceChar::END {
            char::REPLACEMENT_CHARACTER
        } else {
            ch
        };
        SourceChar::new(ch, pos)
    }
}
