// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical infrastructure shared by definition grammars.
//!
//! **DDD Context:** Source Analysis
//!
//! This module contains the character source abstraction, the tokenizer and
//! its keyword/operator tables.
//!
//! # Lexical Analysis
//!
//! A [`TextSource`] yields [`SourceChar`]s; the [`Scanner`] turns them into
//! [`Token`]s. The scanner is generic over a grammar's keyword and operator
//! subtypes, configured through a [`KeywordTable`] and an [`OperatorTable`].
//! Every token carries the [`SourcePos`] of its first character.
//!
//! Line ends are tokens ([`TokenKind::EndOfLine`]), because in definition
//! files a line end terminates a property just like `;` does.
//!
//! # Error Handling
//!
//! The scanner does not recover: a malformed token is returned as a
//! [`LexError`] and the caller abandons the input.

mod error;
mod position;
mod scanner;
mod source;
mod tables;
mod token;


pub use error::{LexError, LexErrorKind};
pub use position::{SourceChar, SourcePos};
pub use scanner::Scanner;
pub use source::{StringSource, TextSource};
pub use tables::{KeywordTable, OperatorTable};
pub use token::{Token, TokenKind};
