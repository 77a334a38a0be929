//! Valuations, aka. assignments of truth values to symbols, and the evaluation of expressions on valuations.
//!
//! A symbol without a value on a valuation is read as false.
//!
//! ```rust
//! # use iengine::structures::{expression::Expression, symbol::Symbol, valuation::Model};
//! let mut model = Model::default();
//! model.insert(Symbol::from_name("p"), true);
//!
//! assert!(Expression::parse("p || q").unwrap().evaluate(&model));
//! assert!(!Expression::parse("p => q").unwrap().evaluate(&model));
//! assert!(Expression::parse("q <=> r").unwrap().evaluate(&model));
//! ```

use std::collections::HashMap;

use crate::structures::{expression::Expression, symbol::Symbol};

/// A (total, for the symbols of interest) assignment of truth values to symbols.
pub type Model = HashMap<Symbol, bool>;

/// Something which may return the value of a symbol.
pub trait Valuation {
    /// The value of the symbol, if the symbol has a value.
    fn value_of(&self, symbol: &Symbol) -> Option<bool>;
}

impl Valuation for HashMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }
}

impl Expression {
    /// The value of the expression on the given valuation.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        match self {
            Self::Literal(symbol) => valuation.value_of(symbol).unwrap_or(false),
            Self::Not(e) => !e.evaluate(valuation),
            Self::And(l, r) => l.evaluate(valuation) && r.evaluate(valuation),
            Self::Or(l, r) => l.evaluate(valuation) || r.evaluate(valuation),
            Self::Implies(l, r) => !l.evaluate(valuation) || r.evaluate(valuation),
            Self::Biconditional(l, r) => l.evaluate(valuation) == r.evaluate(valuation),
        }
    }
}
