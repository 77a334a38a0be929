//! Rules, aka. definite clauses with at least one premise, written as a conjunction of symbols implying a symbol.
//!
//! ```rust
//! # use iengine::structures::rule::{HornClause, Rule};
//! let Ok(HornClause::Rule(rule)) = HornClause::parse("(a & b & a) => c") else {
//!     panic!("Not a rule")
//! };
//!
//! assert_eq!(rule.premises().len(), 2);
//! assert_eq!(rule.conclusion().name(), "c");
//! assert_eq!(rule.count(), 2);
//!
//! let Ok(HornClause::Facts(facts)) = HornClause::parse("a & b") else {
//!     panic!("Not facts")
//! };
//! assert_eq!(facts.len(), 2);
//! ```

use crate::{
    structures::{
        expression::{strip_enclosing, Connective},
        symbol::Symbol,
    },
    types::err::{self},
};

/// A conjunction of premises implying a conclusion, together with a count of premises not yet known to be true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    premises: Vec<Symbol>,
    conclusion: Symbol,
    count: usize,
}

/// A Horn clause is either some number of facts or a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HornClause {
    Facts(Vec<Symbol>),
    Rule(Rule),
}

impl Rule {
    /// A fresh rule, with premises de-duplicated and the count set to the number of (distinct) premises.
    pub fn new(premises: Vec<Symbol>, conclusion: Symbol) -> Self {
        let mut distinct: Vec<Symbol> = Vec::with_capacity(premises.len());
        for premise in premises {
            if !distinct.contains(&premise) {
                distinct.push(premise);
            }
        }
        let count = distinct.len();
        Rule {
            premises: distinct,
            conclusion,
            count,
        }
    }

    pub fn premises(&self) -> &[Symbol] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Symbol {
        &self.conclusion
    }

    /// The number of premises not yet known to be true.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Notes a premise is known to be true, and returns whether every premise is now known to be true.
    ///
    /// The count does not go below zero.
    pub fn satisfy_premise(&mut self) -> bool {
        self.count = self.count.saturating_sub(1);
        self.count == 0
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let premises = self
            .premises
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(" & ");
        write!(f, "{premises} => {}", self.conclusion)
    }
}

impl HornClause {
    /// Reads a Horn clause from some text.
    ///
    /// Text without an implication is read as a conjunction of facts.
    /// Otherwise, the text must contain exactly one implication, with a conjunction of symbols (optionally enclosed in parentheses) as premise and a symbol as conclusion.
    pub fn parse(text: &str) -> Result<Self, err::ParseError> {
        let compact = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        if compact.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let implication = Connective::Implication.token();
        let mut parts = compact.split(implication);

        let antecedent = parts.next().unwrap_or_default();
        let consequent = parts.next();

        if parts.next().is_some() {
            return Err(err::ParseError::MultipleImplications(compact.clone()));
        }

        match consequent {
            None => Ok(HornClause::Facts(Self::conjuncts(&compact, antecedent)?)),

            Some(consequent) => {
                if antecedent.is_empty() || consequent.is_empty() {
                    return Err(err::ParseError::MissingOperand(
                        compact.clone(),
                        Connective::Implication,
                    ));
                }
                let premises = Self::conjuncts(&compact, antecedent)?;
                let conclusion =
                    Symbol::parse(strip_enclosing(consequent).unwrap_or(consequent))?;
                Ok(HornClause::Rule(Rule::new(premises, conclusion)))
            }
        }
    }

    fn conjuncts(clause: &str, text: &str) -> Result<Vec<Symbol>, err::ParseError> {
        let text = strip_enclosing(text).unwrap_or(text);
        text.split(Connective::Conjunction.token())
            .map(|conjunct| match conjunct.is_empty() {
                true => Err(err::ParseError::MissingOperand(
                    clause.to_string(),
                    Connective::Conjunction,
                )),
                false => Symbol::parse(conjunct),
            })
            .collect()
    }
}
