// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for definition files.
//!
//! The [`Scanner`] converts a [`TextSource`] into [`Token`]s. It is
//! hand-written and reads exactly one character at a time; all lookahead is
//! done by reading ahead and pushing characters back.
//!
//! # Pushback
//!
//! The scanner owns two independent stacks:
//!
//! - a **character** stack, used internally when a lookahead character turns
//!   out not to belong to the current token (a lone `/`, a `.` after a number
//!   that is not followed by a digit, operator characters beyond the longest
//!   match);
//! - a **token** stack, exposed through [`Scanner::unread`], which the parser
//!   uses for lookahead. Both are unbounded.
//!
//! # Example
//!
//! ```
//! use shapedef_core::source_analysis::{
//!     KeywordTable, OperatorTable, Scanner, StringSource, TokenKind,
//! };
//!
//! let keywords: KeywordTable<u8> = [("width", 1)].into_iter().collect();
//! let operators: OperatorTable<u8> = [(":", 1)].into_iter().collect();
//! let mut scanner = Scanner::with_tables(keywords, operators);
//! scanner.set_source(StringSource::new("inline", "Width: 10"));
//!
//! assert_eq!(scanner.read().unwrap().kind(), TokenKind::Keyword(1));
//! assert_eq!(scanner.read().unwrap().kind(), TokenKind::Operator(1));
//! assert_eq!(scanner.read().unwrap().kind(), TokenKind::Integer);
//! assert_eq!(scanner.read().unwrap().kind(), TokenKind::EndOfInput);
//! ```

use super::{
    KeywordTable, LexError, OperatorTable, SourceChar, SourcePos, StringSource, TextSource, Token,
    TokenKind,
};

/// A tokenizer over a [`TextSource`], parameterized by a grammar's keyword
/// (`K`) and operator (`O`) subtypes.
///
/// A scanner is stateful and not reentrant. Independent scanners share
/// nothing and can live on different threads.
pub struct Scanner<K, O> {
    keywords: KeywordTable<K>,
    operators: OperatorTable<O>,
    source: Box<dyn TextSource + Send>,
    /// Characters pushed back during lookahead.
    unread_chars: Vec<SourceChar>,
    /// Tokens pushed back by the caller.
    unread_tokens: Vec<Token<K, O>>,
    /// Position of the most recently consumed character.
    last_pos: SourcePos,
}

impl<K, O> std::fmt::Debug for Scanner<K, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("last_pos", &self.last_pos)
            .field("unread_chars", &self.unread_chars.len())
            .field("unread_tokens", &self.unread_tokens.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy, O: Copy> Scanner<K, O> {
    /// Creates a scanner with empty tables over an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tables(KeywordTable::new(), OperatorTable::new())
    }

    /// Creates a scanner with the given tables over an empty source.
    #[must_use]
    pub fn with_tables(keywords: KeywordTable<K>, operators: OperatorTable<O>) -> Self {
        Self {
            keywords,
            operators,
            source: Box::new(StringSource::new("", "")),
            unread_chars: Vec::new(),
            unread_tokens: Vec::new(),
            last_pos: SourcePos::default(),
        }
    }

    /// Replaces the keyword and operator tables.
    pub fn configure(&mut self, keywords: KeywordTable<K>, operators: OperatorTable<O>) {
        self.keywords = keywords;
        self.operators = operators;
    }

    /// Starts scanning `source`. Both pushback stacks are cleared.
    pub fn set_source(&mut self, source: impl TextSource + Send + 'static) {
        self.source = Box::new(source);
        self.unread_chars.clear();
        self.unread_tokens.clear();
        self.last_pos = SourcePos::default();
    }

    /// Returns the position of the most recently consumed character.
    ///
    /// Used to report errors where no token marks the spot, such as running
    /// out of input in the middle of a construct.
    #[must_use]
    pub const fn current_source_pos(&self) -> &SourcePos {
        &self.last_pos
    }

    /// Pushes `token` back; the next [`read`](Self::read) returns it unchanged.
    pub fn unread(&mut self, token: Token<K, O>) {
        self.unread_tokens.push(token);
    }

    /// Returns the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated strings, invalid escapes, and
    /// characters that cannot start a token.
    ///
    /// # Panics
    ///
    /// Panics if a character starts an operator in the operator table but no
    /// operator matches the input that follows it. This is a misconfigured
    /// table (an operator whose proper prefixes are not operators themselves
    /// used on input that only matches a prefix), not a problem with the input.
    pub fn read(&mut self) -> Result<Token<K, O>, LexError> {
        if let Some(token) = self.unread_tokens.pop() {
            return Ok(token);
        }

        self.skip_whitespace();

        let c = self.read_char();
        match c.ch() {
            '\'' | '"' => self.scan_string(c),
            '0'..='9' => Ok(self.scan_number(c)),
            '#' => Ok(self.scan_color(c)),
            '\n' => Ok(Token::new(TokenKind::EndOfLine, "\n", c.into_pos())),
            '\r' => {
                // `\r\n` is one line end.
                let next = self.read_char();
                if next.ch() != '\n' {
                    self.unread_char(next);
                }
                Ok(Token::new(TokenKind::EndOfLine, "\n", c.into_pos()))
            }
            SourceChar::END => Ok(Token::new(TokenKind::EndOfInput, "", c.into_pos())),
            ch if ch.is_alphabetic() || ch == '_' => Ok(self.scan_identifier(c)),
            ch if self.operators.is_first_char(ch) => Ok(self.scan_operator(c)),
            ch => Err(LexError::unexpected_char(ch, c.into_pos())),
        }
    }

    // ========================================================================
    // Character Management
    // ========================================================================

    fn read_char(&mut self) -> SourceChar {
        let c = self
            .unread_chars
            .pop()
            .unwrap_or_else(|| self.source.read_next_char());
        self.last_pos = c.pos().clone();
        c
    }

    fn unread_char(&mut self, c: SourceChar) {
        self.unread_chars.push(c);
    }

    /// Skips spaces and `//` line comments. Line ends are tokens and stop the skip.
    fn skip_whitespace(&mut self) {
        loop {
            let c = self.read_char();
            if c.ch() == '/' {
                let next = self.read_char();
                if next.ch() == '/' {
                    self.skip_line_comment();
                    continue;
                }
                self.unread_char(next);
                self.unread_char(c);
                return;
            }
            if c.is_end() || c.is_line_terminator() || !c.ch().is_whitespace() {
                self.unread_char(c);
                return;
            }
        }
    }

    /// Consumes a comment body up to, not including, the line end.
    fn skip_line_comment(&mut self) {
        loop {
            let c = self.read_char();
            if c.is_end() || c.is_line_terminator() {
                self.unread_char(c);
                return;
            }
        }
    }

    // ========================================================================
    // Token Scanning
    // ========================================================================

    /// Scans a quoted string. `open` is the opening quote.
    fn scan_string(&mut self, open: SourceChar) -> Result<Token<K, O>, LexError> {
        let quote = open.ch();
        let mut text = String::new();
        loop {
            let c = self.read_char();
            match c.ch() {
                ch if ch == quote => break,
                '\\' => {
                    let escaped = self.read_char();
                    match escaped.ch() {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        '\\' => text.push('\\'),
                        '"' => text.push('"'),
                        '\'' => text.push('\''),
                        _ if escaped.is_end() || escaped.is_line_terminator() => {
                            return Err(LexError::unterminated_string(escaped.into_pos()));
                        }
                        other => return Err(LexError::invalid_escape(other, c.into_pos())),
                    }
                }
                _ if c.is_end() || c.is_line_terminator() => {
                    return Err(LexError::unterminated_string(c.into_pos()));
                }
                ch => text.push(ch),
            }
        }
        Ok(Token::new(TokenKind::String, text, open.into_pos()))
    }

    /// Scans an integer or float. A `.` not followed by a digit is left unread.
    fn scan_number(&mut self, first: SourceChar) -> Token<K, O> {
        let mut text = String::from(first.ch());
        self.take_while_into(&mut text, |c| c.is_ascii_digit());

        let mut kind = TokenKind::Integer;
        let dot = self.read_char();
        if dot.ch() == '.' {
            let digit = self.read_char();
            if digit.ch().is_ascii_digit() {
                text.push('.');
                text.push(digit.ch());
                self.take_while_into(&mut text, |c| c.is_ascii_digit());
                kind = TokenKind::Float;
            } else {
                self.unread_char(digit);
                self.unread_char(dot);
            }
        } else {
            self.unread_char(dot);
        }
        Token::new(kind, text, first.into_pos())
    }

    /// Scans an identifier and classifies it through the keyword table.
    /// Letters and digits are Unicode letters and digits.
    fn scan_identifier(&mut self, first: SourceChar) -> Token<K, O> {
        let mut text = String::from(first.ch());
        self.take_while_into(&mut text, |c| c.is_alphanumeric() || c == '_');
        let kind = self
            .keywords
            .lookup(&text)
            .map_or(TokenKind::Identifier, TokenKind::Keyword);
        Token::new(kind, text, first.into_pos())
    }

    /// Scans `#` followed by any number of hex digits.
    fn scan_color(&mut self, hash: SourceChar) -> Token<K, O> {
        let mut text = String::from('#');
        self.take_while_into(&mut text, |c| c.is_ascii_hexdigit());
        Token::new(TokenKind::Color, text, hash.into_pos())
    }

    /// Scans the longest operator starting with `first`.
    ///
    /// Characters are consumed while the candidate is shorter than the longest
    /// operator and the next character occurs in some operator. Every
    /// character read beyond the best match is pushed back.
    fn scan_operator(&mut self, first: SourceChar) -> Token<K, O> {
        let pos = first.pos().clone();
        let mut candidate = String::new();
        let mut consumed: Vec<SourceChar> = Vec::new();
        let mut best: Option<(O, usize)> = None;

        let mut c = first;
        loop {
            candidate.push(c.ch());
            consumed.push(c);
            if let Some(operator) = self.operators.get(&candidate) {
                best = Some((operator, consumed.len()));
            }
            if consumed.len() >= self.operators.max_len() {
                break;
            }
            let next = self.read_char();
            if !self.operators.is_operator_char(next.ch()) {
                self.unread_char(next);
                break;
            }
            c = next;
        }

        let Some((operator, len)) = best else {
            panic!("operator table has no operator matching '{candidate}' at {pos}");
        };
        while consumed.len() > len {
            if let Some(extra) = consumed.pop() {
                self.unread_char(extra);
            }
        }
        let text: String = consumed.iter().map(SourceChar::ch).collect();
        Token::new(TokenKind::Operator(operator), text, pos)
    }

    /// Appends characters to `text` while `predicate` holds; the first
    /// character that fails is pushed back.
    fn take_while_into(&mut self, text: &mut String, predicate: impl Fn(char) -> bool) {
        loop {
            let c = self.read_char();
            if c.is_end() || !predicate(c.ch()) {
                self.unread_char(c);
                return;
            }
            text.push(c.ch());
        }
    }
}

impl<K: Copy, O: Copy> Default for Scanner<K, O> {
    fn default() -> Self {
        Self::new()
    }
}
