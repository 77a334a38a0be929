//! Error types used in the library.
//!
//! - Parse errors are raised whenever some text fails to read as a clause, rule, query, or problem.
//! - Method errors are raised before any reasoning takes place, when a knowledge base uses connectives a method cannot read.
//! - Resource errors are raised during reasoning, when a configured limit would be exceeded.
//!
//! A symbol missing from a valuation is *not* an error, and is read as false.
//! Likewise, a cyclic rule dependency met during backward chaining is not an error, and the goal is unprovable along that path.
//!
//! Names of the error enums overlap with the concern they relate to.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

use crate::{procedures::Method, structures::expression::Connective};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Method(MethodError),
    Resource(ResourceError),
}

/// Noted errors when reading text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// Parentheses in the clause do not balance.
    Unbalanced(String),

    /// A binary connective is missing an operand, e.g. `a=>`.
    MissingOperand(String, Connective),

    /// Some text which should be a symbol is not a symbol.
    InvalidSymbol(String),

    /// A Horn clause with more than one implication.
    MultipleImplications(String),

    /// A problem without a `TELL` marker.
    MissingTell,

    /// A problem without an `ASK` marker.
    MissingAsk,

    /// A problem with nothing between `TELL` and `ASK`.
    EmptyKnowledgeBase,

    /// A problem with nothing after `ASK`.
    EmptyQuery,

    /// The problem file could not be read.
    NoFile(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when matching a knowledge base to a method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MethodError {
    /// The method reads definite clauses only, and the listed connectives were found.
    UnsupportedConnectives(Method, Vec<Connective>),
}

impl From<MethodError> for ErrorKind {
    fn from(e: MethodError) -> Self {
        ErrorKind::Method(e)
    }
}

/// Noted errors when a search outgrows its configured bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// Too many symbols to enumerate every valuation.
    SymbolLimit { symbols: usize, limit: usize },

    /// Recursion went deeper than permitted.
    RecursionLimit(usize),
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty clause"),
            Self::Unbalanced(clause) => write!(f, "unbalanced parentheses in '{clause}'"),
            Self::MissingOperand(clause, connective) => {
                write!(f, "'{connective}' is missing an operand in '{clause}'")
            }
            Self::InvalidSymbol(text) => write!(f, "'{text}' is not a symbol"),
            Self::MultipleImplications(clause) => {
                write!(f, "more than one implication in '{clause}'")
            }
            Self::MissingTell | Self::MissingAsk => {
                write!(f, "the problem must contain both TELL and ASK")
            }
            Self::EmptyKnowledgeBase => write!(f, "the knowledge base is empty"),
            Self::EmptyQuery => write!(f, "the query is empty"),
            Self::NoFile(path) => write!(f, "unable to read '{path}'"),
        }
    }
}

impl std::fmt::Display for MethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedConnectives(method, connectives) => {
                let listed = connectives
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{method} requires a Horn knowledge base, found: {listed}")
            }
        }
    }
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SymbolLimit { symbols, limit } => {
                write!(f, "{symbols} symbols exceed the truth table limit of {limit}")
            }
            Self::RecursionLimit(limit) => write!(f, "recursion deeper than {limit}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Method(e) => write!(f, "Method error: {e}"),
            Self::Resource(e) => write!(f, "Resource error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
