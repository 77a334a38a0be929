//! Literals are symbols paired with a (boolean) polarity.
//!
//! Literals are read from text as a symbol, optionally prefixed with a negation character (`-` or `~`).
//!
//! ```rust
//! # use iengine::structures::literal::Literal;
//! let literal = Literal::parse("-rain").unwrap();
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.symbol().name(), "rain");
//! assert_eq!(literal.negate().to_string(), "rain");
//! ```
//!
//! Literals are ordered by symbol and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.

use serde::Serialize;

use crate::{structures::symbol::Symbol, types::err::{self}};

/// The characters read as negation when prefixed to a symbol.
pub const NEGATION_CHARACTERS: [char; 2] = ['-', '~'];

/// A symbol paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Literal {
    /// The symbol of a literal.
    symbol: Symbol,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a symbol with a boolean.
    pub fn new(symbol: Symbol, polarity: bool) -> Self {
        Literal { symbol, polarity }
    }

    /// Reads a literal from some text.
    pub fn parse(text: &str) -> Result<Self, err::ParseError> {
        let text = text.trim();
        match text.strip_prefix(NEGATION_CHARACTERS) {
            Some(rest) => Ok(Literal::new(Symbol::parse(rest)?, false)),
            None => Ok(Literal::new(Symbol::parse(text)?, true)),
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            symbol: self.symbol.clone(),
            polarity: !self.polarity,
        }
    }

    /// The symbol of the literal.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.symbol),
            false => write!(f, "-{}", self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_characters() {
        assert_eq!(Literal::parse("~p"), Literal::parse("-p"));
        assert_eq!(Literal::parse(" p "), Ok(Literal::new(Symbol::from_name("p"), true)));
        assert_eq!(Literal::parse("-"), Err(err::ParseError::Empty));
        assert!(Literal::parse("--p").is_err());
    }

    #[test]
    fn order() {
        let p = Literal::parse("p").unwrap();
        assert!(p.negate() < p);
        assert!(p < Literal::parse("-q").unwrap());
    }
}
