//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! Clauses are read from text as literals separated by `|` (or `||`).
//! Whitespace is ignored, as is a pair of parentheses enclosing the whole clause.
//!
//! ```rust
//! # use iengine::structures::clause::{parse_clause, Clause};
//! let clause = parse_clause("p | -q || r | p").unwrap();
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "p | -q | r");
//! assert!(!clause.is_tautology());
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::{
    structures::{
        expression::{strip_enclosing, Connective},
        literal::Literal,
        symbol::Symbol,
    },
    types::err::{self},
};

/// The canonical implementation of a clause.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, in order of occurrence.
    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all symbols in the clause.
    fn symbols(&self) -> impl Iterator<Item = &Symbol>;

    /// Whether the clause contains some literal together with its negation.
    fn is_tautology(&self) -> bool;

    /// The clause without the literals which conflict with the given literal, or None if the literal satisfies the clause.
    fn simplify(&self, literal: &Literal) -> Option<CClause>;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.iter().map(|literal| literal.symbol())
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| self.iter().any(|other| *other == literal.negate()))
    }

    fn simplify(&self, literal: &Literal) -> Option<CClause> {
        if self.contains(literal) {
            return None;
        }
        let negation = literal.negate();
        Some(self.iter().filter(|l| **l != negation).cloned().collect())
    }
}

/// Reads a clause from some text, merging duplicate literals.
pub fn parse_clause(text: &str) -> Result<CClause, err::ParseError> {
    let compact = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    if compact.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let body = strip_enclosing(&compact).unwrap_or(&compact).replace("||", "|");

    let mut clause = CClause::default();
    for token in body.split('|') {
        if token.is_empty() {
            return Err(err::ParseError::MissingOperand(
                compact.clone(),
                Connective::Disjunction,
            ));
        }
        let literal = Literal::parse(token)?;
        if !clause.contains(&literal) {
            clause.push(literal);
        }
    }

    Ok(clause)
}
