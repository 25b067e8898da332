// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Keyword and operator tables that configure a [`Scanner`](super::Scanner).
//!
//! Keywords are matched case-insensitively. Operators are matched exactly and
//! may be longer than one character; the table keeps the derived data the
//! scanner needs to bound its operator lookahead.

use std::collections::{HashMap, HashSet};

use ecow::EcoString;

/// Case-insensitive mapping from keyword text to a keyword subtype.
///
/// # Examples
///
/// ```
/// use shapedef_core::source_analysis::KeywordTable;
///
/// let table: KeywordTable<u8> = [("Icon", 1), ("toolbar", 2)].into_iter().collect();
/// assert_eq!(table.lookup("ICON"), Some(1));
/// assert_eq!(table.lookup("shape"), None);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordTable<K> {
    entries: HashMap<EcoString, K>,
}

impl<K: Copy> KeywordTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds a keyword. The text is stored lower-cased.
    pub fn insert(&mut self, text: &str, keyword: K) {
        self.entries.insert(text.to_lowercase().into(), keyword);
    }

    /// Looks up `text`, ignoring case.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<K> {
        self.entries.get(text.to_lowercase().as_str()).copied()
    }

    /// Returns the number of keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Copy> Default for KeywordTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K: Copy> FromIterator<(&'a str, K)> for KeywordTable<K> {
    fn from_iter<I: IntoIterator<Item = (&'a str, K)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (text, keyword) in iter {
            table.insert(text, keyword);
        }
        table
    }
}

/// Exact mapping from operator text to an operator subtype.
///
/// Besides the mapping itself the table maintains:
/// - the length (in characters) of the longest operator,
/// - the set of characters that can start an operator,
/// - the set of characters that occur anywhere in an operator.
///
/// # Examples
///
/// ```
/// use shapedef_core::source_analysis::OperatorTable;
///
/// let table: OperatorTable<u8> = [("-", 1), ("->", 2)].into_iter().collect();
/// assert_eq!(table.max_len(), 2);
/// assert!(table.is_first_char('-'));
/// assert!(!table.is_first_char('>'));
/// assert!(table.is_operator_char('>'));
/// ```
#[derive(Debug, Clone)]
pub struct OperatorTable<O> {
    entries: HashMap<EcoString, O>,
    max_len: usize,
    first_chars: HashSet<char>,
    operator_chars: HashSet<char>,
}

impl<O: Copy> OperatorTable<O> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            max_len: 0,
            first_chars: HashSet::new(),
            operator_chars: HashSet::new(),
        }
    }

    /// Adds an operator. Empty operators are ignored.
    pub fn insert(&mut self, text: &str, operator: O) {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return;
        };
        self.first_chars.insert(first);
        self.operator_chars.insert(first);
        self.operator_chars.extend(chars);
        self.max_len = self.max_len.max(text.chars().count());
        self.entries.insert(text.into(), operator);
    }

    /// Looks up `text` exactly.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<O> {
        self.entries.get(text).copied()
    }

    /// Returns the length in characters of the longest operator.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns `true` if some operator starts with `c`.
    #[must_use]
    pub fn is_first_char(&self, c: char) -> bool {
        self.first_chars.contains(&c)
    }

    /// Returns `true` if some operator contains `c`.
    #[must_use]
    pub fn is_operator_char(&self, c: char) -> bool {
        self.operator_chars.contains(&c)
    }

    /// Returns the number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O: Copy> Default for OperatorTable<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, O: Copy> FromIterator<(&'a str, O)> for OperatorTable<O> {
    fn from_iter<I: IntoIterator<Item = (&'a str, O)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (text, operator) in iter {
            table.insert(text, operator);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_ignore_case() {
        let table: KeywordTable<u8> = [("MinWidth", 4)].into_iter().collect();
        assert_eq!(table.lookup("minwidth"), Some(4));
        assert_eq!(table.lookup("MINWIDTH"), Some(4));
        assert_eq!(table.lookup("minWidth"), Some(4));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn keywords_replace_on_reinsert() {
        let mut table = KeywordTable::new();
        table.insert("id", 1);
        table.insert("ID", 2);
        assert_eq!(table.lookup("id"), Some(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn operators_are_exact() {
        let table: OperatorTable<u8> = [(":", 1), ("::", 2)].into_iter().collect();
        assert_eq!(table.get(":"), Some(1));
        assert_eq!(table.get("::"), Some(2));
        assert_eq!(table.get(":::"), None);
    }

    #[test]
    fn operator_derived_sets() {
        let table: OperatorTable<u8> = [("{", 1), ("<=>", 2), ("=", 3)].into_iter().collect();
        assert_eq!(table.max_len(), 3);
        assert!(table.is_first_char('{'));
        assert!(table.is_first_char('<'));
        assert!(table.is_first_char('='));
        assert!(!table.is_first_char('>'));
        assert!(table.is_operator_char('>'));
        assert!(!table.is_operator_char('x'));
    }

    #[test]
    fn empty_operator_ignored() {
        let mut table = OperatorTable::new();
        table.insert("", 1u8);
        assert!(table.is_empty());
        assert_eq!(table.max_len(), 0);
    }
}
