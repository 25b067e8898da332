// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for icon and toolbar definition files.
//!
//! **DDD Context:** Definitions
//!
//! The parser drives a [`Scanner`] configured with the grammar's
//! [`Keyword`] and [`Operator`] tables and hands every completed entity to a
//! [`DefinitionHandler`] as soon as its closing `}` is read.
//!
//! # Grammar
//!
//! ```text
//! File       := (IconDef | ToolbarDef)* EndOfInput
//! IconDef    := "icon" Word Block(IconProp)
//! ToolbarDef := "toolbar" Word Block(ToolbarProp)
//! Block(P)   := "{" P* "}"
//! ```
//!
//! A property ends with `;` or a line end; the last property of a block may
//! run straight into the closing `}`. Blank lines and stray `;` are skipped
//! and a line end may separate a header from its `{`.
//!
//! # Error Handling
//!
//! There is no error recovery inside one input: the first lexical or
//! grammar error is returned from [`DefinitionParser::parse`]. Entities
//! completed before the error have already been handed to the handler; a
//! partially parsed entity never is.
//!
//! # Usage
//!
//! ```
//! use shapedef_core::definition::parse_definitions;
//!
//! let definitions = parse_definitions(
//!     "inline.def",
//!     "icon Foo {\n  id: Foo\n  title: \"Foo Icon\"\n}\n",
//! )
//! .unwrap();
//! assert_eq!(definitions.icons.len(), 1);
//! assert_eq!(definitions.icons[0].title, "Foo Icon");
//! ```

use std::str::FromStr;

use ecow::EcoString;
use tracing::{debug, trace};

use crate::model::{Color, StereotypeIcon, Toolbar, ValueError};
use crate::source_analysis::{Scanner, StringSource, TextSource, Token, TokenKind};

mod error;
mod icon;
mod keywords;
mod toolbar;


pub use error::{GrammarError, ParseError};
pub use keywords::{Keyword, Operator, keyword_table, operator_table};

#[cfg(test)]
pub(crate) use icon::shape_parameters;

/// A token of the definition grammar.
pub type DefToken = Token<Keyword, Operator>;

/// Receives entities as the parser completes them.
pub trait DefinitionHandler {
    /// Called once for every icon, in source order.
    fn icon_parsed(&mut self, icon: StereotypeIcon);

    /// Called once for every toolbar, in source order.
    fn toolbar_parsed(&mut self, toolbar: Toolbar);
}

/// A [`DefinitionHandler`] that collects everything it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    /// Icons in source order.
    pub icons: Vec<StereotypeIcon>,
    /// Toolbars in source order.
    pub toolbars: Vec<Toolbar>,
}

impl Definitions {
    /// Returns the total number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len() + self.toolbars.len()
    }

    /// Returns `true` if no definitions were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty() && self.toolbars.is_empty()
    }
}

impl DefinitionHandler for Definitions {
    fn icon_parsed(&mut self, icon: StereotypeIcon) {
        self.icons.push(icon);
    }

    fn toolbar_parsed(&mut self, toolbar: Toolbar) {
        self.toolbars.push(toolbar);
    }
}

/// Parses `text` and collects all of its definitions.
///
/// # Errors
///
/// Returns the first [`ParseError`] in the text. Definitions completed before
/// the error are discarded; use [`DefinitionParser::parse`] with a handler to
/// keep them.
pub fn parse_definitions(
    source_id: impl Into<EcoString>,
    text: impl Into<String>,
) -> Result<Definitions, ParseError> {
    let mut definitions = Definitions::default();
    DefinitionParser::new().parse(StringSource::new(source_id, text), &mut definitions)?;
    Ok(definitions)
}

/// Parser for definition files.
///
/// A parser can be reused for any number of inputs, one at a time.
#[derive(Debug)]
pub struct DefinitionParser {
    scanner: Scanner<Keyword, Operator>,
}

impl Default for DefinitionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionParser {
    /// Creates a parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: Scanner::with_tables(keyword_table(), operator_table()),
        }
    }

    /// Parses every definition in `source`, handing each to `handler`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or grammar error. Definitions completed
    /// before it have already been passed to `handler`.
    pub fn parse<H: DefinitionHandler + ?Sized>(
        &mut self,
        source: impl TextSource + Send + 'static,
        handler: &mut H,
    ) -> Result<(), ParseError> {
        self.scanner.set_source(source);
        loop {
            let token = self.next()?;
            match token.kind() {
                TokenKind::EndOfInput => return Ok(()),
                TokenKind::EndOfLine | TokenKind::Operator(Operator::Semicolon) => {}
                TokenKind::Keyword(Keyword::Icon) => {
                    let icon = self.parse_icon(&token)?;
                    debug!(id = %icon.id, name = %icon.name, pos = %icon.pos, "icon parsed");
                    handler.icon_parsed(icon);
                }
                TokenKind::Keyword(Keyword::Toolbar) => {
                    let toolbar = self.parse_toolbar(&token)?;
                    debug!(id = %toolbar.id, name = %toolbar.name, pos = %toolbar.pos, "toolbar parsed");
                    handler.toolbar_parsed(toolbar);
                }
                _ => return Err(unexpected(&token, "'icon' or 'toolbar'")),
            }
        }
    }

    // ========================================================================
    // Token Access
    // ========================================================================

    pub(super) fn next(&mut self) -> Result<DefToken, ParseError> {
        Ok(self.scanner.read()?)
    }

    pub(super) fn unread(&mut self, token: DefToken) {
        self.scanner.unread(token);
    }

    fn next_skipping_line_ends(&mut self) -> Result<DefToken, ParseError> {
        loop {
            let token = self.next()?;
            if !token.kind().is_end_of_line() {
                return Ok(token);
            }
        }
    }

    // ========================================================================
    // Blocks and Properties
    // ========================================================================

    /// Parses `{ ... }`, calling `property` for every keyword that starts a
    /// statement inside the block.
    ///
    /// The statement loop ends at the first token that is not a keyword or a
    /// separator; that token must be the closing `}`. An identifier in
    /// statement position is an unknown property.
    pub(super) fn parse_block<F>(&mut self, mut property: F) -> Result<(), ParseError>
    where
        F: FnMut(&mut Self, Keyword, DefToken) -> Result<(), ParseError>,
    {
        let open = self.next_skipping_line_ends()?;
        if open.operator() != Some(Operator::LeftBrace) {
            return Err(unexpected(&open, "'{'"));
        }
        trace!(pos = %open.pos(), "block opened");

        loop {
            let token = self.next()?;
            match token.kind() {
                TokenKind::EndOfLine | TokenKind::Operator(Operator::Semicolon) => {}
                TokenKind::Keyword(keyword) => property(self, keyword, token)?,
                TokenKind::Identifier => return Err(unknown_property(&token)),
                _ => {
                    self.unread(token);
                    break;
                }
            }
        }

        let close = self.next()?;
        if close.operator() != Some(Operator::RightBrace) {
            return Err(unexpected(&close, "'}'"));
        }
        trace!(pos = %close.pos(), "block closed");
        Ok(())
    }

    /// Parses an optional `{ }` after a statement that takes no properties.
    pub(super) fn parse_optional_empty_block(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        if token.operator() == Some(Operator::LeftBrace) {
            let close = self.next_skipping_line_ends()?;
            if close.operator() != Some(Operator::RightBrace) {
                return Err(unexpected(&close, "'}'"));
            }
        } else {
            self.unread(token);
        }
        Ok(())
    }

    /// Parses `: <value>` followed by the end of the property.
    pub(super) fn property_value<T>(
        &mut self,
        value: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.expect_operator(Operator::Colon)?;
        let value = value(self)?;
        self.end_property()?;
        Ok(value)
    }

    /// Consumes the `;` or line end after a property value. A `}` or the end
    /// of input is left for the enclosing block.
    fn end_property(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        match token.kind() {
            TokenKind::EndOfLine | TokenKind::Operator(Operator::Semicolon) => Ok(()),
            TokenKind::Operator(Operator::RightBrace) | TokenKind::EndOfInput => {
                self.unread(token);
                Ok(())
            }
            _ => Err(unexpected(&token, "';' or end of line")),
        }
    }

    // ========================================================================
    // Values
    // ========================================================================

    pub(super) fn expect_operator(&mut self, operator: Operator) -> Result<DefToken, ParseError> {
        let token = self.next()?;
        if token.operator() == Some(operator) {
            Ok(token)
        } else {
            Err(unexpected(&token, &format!("'{}'", operator.as_str())))
        }
    }

    /// Expects an identifier or a keyword.
    pub(super) fn expect_word(&mut self, what: &str) -> Result<DefToken, ParseError> {
        let token = self.next()?;
        if token.kind().is_word() {
            Ok(token)
        } else {
            Err(unexpected(&token, what))
        }
    }

    pub(super) fn expect_string(&mut self, what: &str) -> Result<EcoString, ParseError> {
        let token = self.next()?;
        if token.kind() == TokenKind::String {
            Ok(token.into_text())
        } else {
            Err(unexpected(&token, what))
        }
    }

    /// Expects an integer or float, optionally preceded by `-`.
    pub(super) fn expect_number(&mut self, what: &str) -> Result<f64, ParseError> {
        let (negative, token) = self.signed()?;
        if !token.kind().is_number() {
            return Err(unexpected(&token, what));
        }
        let value: f64 = token.text().parse().map_err(|_| {
            GrammarError::new(format!("invalid number '{}'", token.text()), token.pos().clone())
        })?;
        Ok(if negative { -value } else { value })
    }

    /// Expects an integer, optionally preceded by `-`, that fits in an `i32`.
    pub(super) fn expect_integer(&mut self, what: &str) -> Result<i32, ParseError> {
        let (negative, token) = self.signed()?;
        if token.kind() != TokenKind::Integer {
            return Err(unexpected(&token, what));
        }
        let text = if negative {
            format!("-{}", token.text())
        } else {
            token.text().to_string()
        };
        text.parse().map_err(|_| {
            GrammarError::new(format!("integer '{text}' out of range"), token.pos().clone()).into()
        })
    }

    /// Reads the next token, consuming a leading `-`.
    fn signed(&mut self) -> Result<(bool, DefToken), ParseError> {
        let token = self.next()?;
        if token.operator() == Some(Operator::Minus) {
            Ok((true, self.next()?))
        } else {
            Ok((false, token))
        }
    }

    pub(super) fn expect_color(&mut self) -> Result<Color, ParseError> {
        let token = self.next()?;
        if token.kind() != TokenKind::Color {
            return Err(unexpected(&token, "color"));
        }
        token
            .text()
            .parse()
            .map_err(|err: ValueError| {
                GrammarError::new(err.to_string(), token.pos().clone()).into()
            })
    }

    /// Expects a word naming a variant of `T`, ignoring case.
    pub(super) fn parse_value<T: FromStr>(&mut self, what: &str) -> Result<T, ParseError> {
        let token = self.expect_word(what)?;
        token.text().parse().map_err(|_| {
            GrammarError::new(
                format!("unknown {what} '{}'", token.text()),
                token.pos().clone(),
            )
            .into()
        })
    }

    /// Parses a comma-separated list of values.
    pub(super) fn parse_list<T: FromStr>(&mut self, what: &str) -> Result<Vec<T>, ParseError> {
        let mut values = vec![self.parse_value(what)?];
        loop {
            let token = self.next()?;
            if token.operator() == Some(Operator::Comma) {
                values.push(self.parse_value(what)?);
            } else {
                self.unread(token);
                return Ok(values);
            }
        }
    }
}

/// Describes a token for an error message.
fn describe(token: &DefToken) -> String {
    match token.kind() {
        TokenKind::EndOfInput => "end of input".to_string(),
        TokenKind::EndOfLine => "end of line".to_string(),
        TokenKind::String => format!("string \"{}\"", token.text()),
        _ => format!("'{}'", token.text()),
    }
}

fn unexpected(token: &DefToken, expected: &str) -> ParseError {
    GrammarError::new(
        format!("expected {expected}, found {}", describe(token)),
        token.pos().clone(),
    )
    .into()
}

fn unknown_property(token: &DefToken) -> ParseError {
    GrammarError::new(
        format!("unknown property '{}'", token.text()),
        token.pos().clone(),
    )
    .into()
}
