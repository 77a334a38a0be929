//! Symbols, aka. propositional variables.
//!
//! A symbol is named by one or more (ascii) letters followed by zero or more digits, e.g. `p`, `a1`, or `rain2`.
//! Symbols are compared by name.
//!
//! ```rust
//! # use iengine::structures::symbol::Symbol;
//! assert!(Symbol::parse("rain2").is_ok());
//! assert!(Symbol::parse("2rain").is_err());
//! assert!(Symbol::parse("ra2in").is_err());
//!
//! let found = Symbol::scan("(a1&b)=>~c").collect::<Vec<_>>();
//! assert_eq!(found, vec![Symbol::from_name("a1"), Symbol::from_name("b"), Symbol::from_name("c")]);
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::types::err::{self};

/// A propositional variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// Reads a symbol from some text, which must be exactly a symbol name.
    pub fn parse(text: &str) -> Result<Self, err::ParseError> {
        match Self::name_length(text) {
            Some(length) if length == text.len() => Ok(Self::from_name(text)),
            _ => match text.is_empty() {
                true => Err(err::ParseError::Empty),
                false => Err(err::ParseError::InvalidSymbol(text.to_string())),
            },
        }
    }

    /// A symbol with the given name, without checking the name is well formed.
    pub fn from_name(name: &str) -> Self {
        Symbol {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The length of the symbol name at the start of the text, if the text starts with a symbol name.
    fn name_length(text: &str) -> Option<usize> {
        let bytes = text.as_bytes();
        let letters = bytes
            .iter()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if letters == 0 {
            return None;
        }
        let digits = bytes[letters..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        Some(letters + digits)
    }

    /// An iterator over every symbol name occurring in some text, in order of occurrence.
    ///
    /// The scan is by name alone, and so finds symbols within any surrounding connectives or parentheses.
    pub fn scan(text: &str) -> impl Iterator<Item = Symbol> + '_ {
        let mut position = 0;
        std::iter::from_fn(move || {
            while position < text.len() {
                match Self::name_length(&text[position..]) {
                    Some(length) => {
                        let symbol = Self::from_name(&text[position..position + length]);
                        position += length;
                        return Some(symbol);
                    }
                    None => {
                        position += text[position..].chars().next().map_or(1, char::len_utf8);
                    }
                }
            }
            None
        })
    }

    /// The distinct symbols occurring in a collection of texts, in order of first occurrence.
    pub fn scan_all<'t>(texts: impl IntoIterator<Item = &'t str>) -> Vec<Symbol> {
        let mut seen = HashSet::new();
        let mut symbols = Vec::new();
        for text in texts {
            for symbol in Self::scan(text) {
                if seen.insert(symbol.clone()) {
                    symbols.push(symbol);
                }
            }
        }
        symbols
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_leading_digits() {
        let found = Symbol::scan("12ab3c 4").map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(found, vec!["ab3", "c"]);
    }

    #[test]
    fn scan_all_is_distinct_and_ordered() {
        let found = Symbol::scan_all(["b=>a", "a&c", "b"]);
        let names = found.iter().map(Symbol::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Symbol::parse(""), Err(err::ParseError::Empty));
        assert_eq!(
            Symbol::parse("a-b"),
            Err(err::ParseError::InvalidSymbol("a-b".to_string()))
        );
        assert_eq!(Symbol::parse("a12").map(|s| s.name), Ok("a12".to_string()));
    }
}
