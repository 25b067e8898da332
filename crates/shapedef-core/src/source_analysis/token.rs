// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types produced by the scanner.
//!
//! The scanner is shared between grammars, so keyword and operator subtypes
//! are type parameters: each grammar supplies its own closed enums and the
//! tables mapping text to them (see [`KeywordTable`](super::KeywordTable) and
//! [`OperatorTable`](super::OperatorTable)).
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token (and the subtype, for
//!   keywords and operators)
//! - The token text (unescaped content for strings, `#` plus digits for colors)
//! - The [`SourcePos`] of its first character

use ecow::EcoString;

use super::SourcePos;

/// The kind of a token.
///
/// `K` is the keyword subtype and `O` the operator subtype of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind<K, O> {
    /// End of input. Once reached, the scanner keeps returning it.
    EndOfInput,

    /// A line-feed or carriage-return. Line ends separate statements, so
    /// they are tokens rather than whitespace.
    EndOfLine,

    /// A quoted string: `"Foo Icon"`, `'interface'`
    String,

    /// An integer literal: `42`
    Integer,

    /// A floating-point literal: `2.5`
    Float,

    /// An identifier that is not a keyword: `Foo`
    Identifier,

    /// An identifier found in the keyword table.
    Keyword(K),

    /// An operator found in the operator table.
    Operator(O),

    /// A color literal: `#ff8000`
    Color,
}

impl<K, O> TokenKind<K, O> {
    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Returns `true` if this is a line end.
    #[must_use]
    pub const fn is_end_of_line(&self) -> bool {
        matches!(self, Self::EndOfLine)
    }

    /// Returns `true` for identifiers and keywords, the two word-like kinds.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Identifier | Self::Keyword(_))
    }

    /// Returns `true` for integer and float literals.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

/// A lexical unit with its text and position.
///
/// Tokens are only built by the scanner and are immutable afterwards. They
/// are cheap to clone, which is how the scanner's unread stack holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<K, O> {
    kind: TokenKind<K, O>,
    text: EcoString,
    pos: SourcePos,
}

impl<K: Copy, O: Copy> Token<K, O> {
    pub(crate) fn new(kind: TokenKind<K, O>, text: impl Into<EcoString>, pos: SourcePos) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Returns the token kind.
    #[must_use]
    pub fn kind(&self) -> TokenKind<K, O> {
        self.kind
    }

    /// Returns the token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the position of the first character of the token.
    #[must_use]
    pub const fn pos(&self) -> &SourcePos {
        &self.pos
    }

    /// Returns the keyword subtype, if this is a keyword.
    #[must_use]
    pub fn keyword(&self) -> Option<K> {
        match self.kind {
            TokenKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Returns the operator subtype, if this is an operator.
    #[must_use]
    pub fn operator(&self) -> Option<O> {
        match self.kind {
            TokenKind::Operator(o) => Some(o),
            _ => None,
        }
    }

    /// Consumes the token and returns its text.
    #[must_use]
    pub fn into_text(self) -> EcoString {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestToken = Token<u8, u8>;

    fn pos() -> SourcePos {
        SourcePos::new("t", 1, Some(1), 0)
    }

    #[test]
    fn subtype_accessors() {
        let kw = TestToken::new(TokenKind::Keyword(3), "icon", pos());
        assert_eq!(kw.keyword(), Some(3));
        assert_eq!(kw.operator(), None);

        let op = TestToken::new(TokenKind::Operator(7), ":", pos());
        assert_eq!(op.operator(), Some(7));
        assert_eq!(op.keyword(), None);

        let ident = TestToken::new(TokenKind::Identifier, "Foo", pos());
        assert_eq!(ident.keyword(), None);
        assert_eq!(ident.operator(), None);
    }

    #[test]
    fn kind_predicates() {
        assert!(TokenKind::<u8, u8>::EndOfInput.is_end_of_input());
        assert!(TokenKind::<u8, u8>::EndOfLine.is_end_of_line());
        assert!(TokenKind::<u8, u8>::Identifier.is_word());
        assert!(TokenKind::<u8, u8>::Keyword(1).is_word());
        assert!(!TokenKind::<u8, u8>::String.is_word());
        assert!(TokenKind::<u8, u8>::Integer.is_number());
        assert!(TokenKind::<u8, u8>::Float.is_number());
        assert!(!TokenKind::<u8, u8>::Color.is_number());
    }

    #[test]
    fn clone_is_equal() {
        let token = TestToken::new(TokenKind::String, "Foo Icon", pos());
        let copy = token.clone();
        assert_eq!(token, copy);
        assert_eq!(copy.text(), "Foo Icon");
        assert_eq!(copy.into_text(), "Foo Icon");
    }
}
