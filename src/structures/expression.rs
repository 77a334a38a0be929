//! Expressions, aka. propositional formulas, as trees of symbols and connectives.
//!
//! Expressions are read from text by repeatedly splitting the text at its *main* connective.
//!
//! The main connective is found by a left-to-right scan which tracks the depth of parentheses.
//! The first position at depth zero where one of the binary connectives `<=>`, `=>`, `||`, or `&` occurs is the split point.
//! No connective binds more strongly than another: only position matters.
//! So, `a&b=>c` splits at `&`, giving `a` and `b=>c`, while `a=>b&c` splits at `=>`, giving `a` and `b&c`.
//!
//! If no binary connective occurs at depth zero the text is a (possibly negated, possibly parenthesised) symbol.
//!
//! ```rust
//! # use iengine::structures::expression::{Connective, Expression, Split, main_connective};
//! # use iengine::structures::symbol::Symbol;
//! let split = main_connective("(a&b)=>c").unwrap();
//! assert_eq!(split, Split::Binary { left: "(a&b)", connective: Connective::Implication, right: "c" });
//!
//! let expression = Expression::parse("~a || (b <=> c)").unwrap();
//! assert_eq!(expression.to_string(), "(~a || (b <=> c))");
//! ```
//!
//! Whitespace is ignored.
//! Nesting is bounded, and text nested deeper than the bound fails to read with a [resource error](crate::types::err::ResourceError).

use crate::{
    config::defaults,
    misc::log::targets::{self},
    structures::symbol::Symbol,
    types::err::{self},
};

/// The connectives which may occur in a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connective {
    /// `<=>`
    Biconditional,

    /// `=>`
    Implication,

    /// `||`
    Disjunction,

    /// `&`
    Conjunction,

    /// `~`
    Negation,
}

impl Connective {
    /// The binary connectives, in the order they are tested at each position of a scan.
    pub const BINARY: [Connective; 4] = [
        Connective::Biconditional,
        Connective::Implication,
        Connective::Disjunction,
        Connective::Conjunction,
    ];

    /// The text of the connective.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Biconditional => "<=>",
            Self::Implication => "=>",
            Self::Disjunction => "||",
            Self::Conjunction => "&",
            Self::Negation => "~",
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Literal(Symbol),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Implies(Box<Expression>, Box<Expression>),
    Biconditional(Box<Expression>, Box<Expression>),
}

/// The result of looking for the main connective of some text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split<'s> {
    /// The text splits at a binary connective.
    Binary {
        left: &'s str,
        connective: Connective,
        right: &'s str,
    },

    /// The text contains no binary connective at depth zero.
    Atomic(&'s str),
}

/// Finds the leftmost binary connective at parenthesis depth zero.
///
/// The text is expected to be free of whitespace.
/// Parentheses are checked only up to the split point, and the remainder is checked when the sides are read.
pub fn main_connective(text: &str) -> Result<Split<'_>, err::ParseError> {
    let mut depth: usize = 0;

    for (index, character) in text.char_indices() {
        match character {
            '(' => depth += 1,

            ')' => match depth.checked_sub(1) {
                Some(lower) => depth = lower,
                None => return Err(err::ParseError::Unbalanced(text.to_string())),
            },

            _ if depth == 0 => {
                let rest = &text[index..];
                if let Some(connective) = Connective::BINARY
                    .into_iter()
                    .find(|connective| rest.starts_with(connective.token()))
                {
                    return Ok(Split::Binary {
                        left: &text[..index],
                        connective,
                        right: &text[index + connective.token().len()..],
                    });
                }
            }

            _ => {}
        }
    }

    match depth {
        0 => Ok(Split::Atomic(text)),
        _ => Err(err::ParseError::Unbalanced(text.to_string())),
    }
}

/// The text within a pair of parentheses which enclose the whole text, if there is such a pair.
///
/// `(a&b)` is enclosed, while `(a)&(b)` is not.
pub fn strip_enclosing(text: &str) -> Option<&str> {
    if !text.starts_with('(') {
        return None;
    }

    let mut depth: usize = 0;
    for (index, character) in text.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return match index == text.len() - 1 {
                        true => Some(&text[1..index]),
                        false => None,
                    };
                }
            }
            _ => {}
        }
    }
    None
}

impl Expression {
    /// Reads an expression from some text, with nesting bounded by the [default recursion limit](defaults::RECURSION_LIMIT).
    pub fn parse(text: &str) -> Result<Self, err::ErrorKind> {
        Self::parse_within(text, defaults::RECURSION_LIMIT)
    }

    /// Reads an expression from some text, failing if subexpressions nest deeper than the limit.
    ///
    /// The bound on nesting also bounds the recursion of [evaluation](Expression::evaluate) on the expression.
    pub fn parse_within(text: &str, limit: usize) -> Result<Self, err::ErrorKind> {
        let compact = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        let expression = Self::parse_compact(&compact, 0, limit)?;
        log::trace!(target: targets::PARSE, "Read {compact} as {expression}");
        Ok(expression)
    }

    fn parse_compact(text: &str, depth: usize, limit: usize) -> Result<Self, err::ErrorKind> {
        if text.is_empty() {
            return Err(err::ErrorKind::from(err::ParseError::Empty));
        }

        if depth >= limit {
            log::error!(target: targets::PARSE, "Nesting of {limit} reached");
            return Err(err::ErrorKind::from(err::ResourceError::RecursionLimit(limit)));
        }

        match main_connective(text)? {
            Split::Binary {
                left,
                connective,
                right,
            } => {
                if left.is_empty() || right.is_empty() {
                    return Err(err::ErrorKind::from(err::ParseError::MissingOperand(
                        text.to_string(),
                        connective,
                    )));
                }
                let left = Self::parse_compact(strip_enclosing(left).unwrap_or(left), depth + 1, limit)?;
                let right = Self::parse_compact(strip_enclosing(right).unwrap_or(right), depth + 1, limit)?;
                Self::binary(connective, left, right).ok_or_else(|| {
                    err::ErrorKind::from(err::ParseError::InvalidSymbol(text.to_string()))
                })
            }

            Split::Atomic(atomic) => {
                if let Some(operand) = atomic.strip_prefix(Connective::Negation.token()) {
                    return match operand.is_empty() {
                        true => Err(err::ErrorKind::from(err::ParseError::MissingOperand(
                            text.to_string(),
                            Connective::Negation,
                        ))),
                        false => Ok(Self::Not(Box::new(Self::parse_compact(
                            operand,
                            depth + 1,
                            limit,
                        )?))),
                    };
                }

                match strip_enclosing(atomic) {
                    Some(inner) => Self::parse_compact(inner, depth + 1, limit),
                    None => Ok(Self::Literal(Symbol::parse(atomic)?)),
                }
            }
        }
    }

    /// The expression formed by joining two expressions with a binary connective, or None if the connective is not binary.
    pub fn binary(connective: Connective, left: Expression, right: Expression) -> Option<Self> {
        let (left, right) = (Box::new(left), Box::new(right));
        match connective {
            Connective::Biconditional => Some(Self::Biconditional(left, right)),
            Connective::Implication => Some(Self::Implies(left, right)),
            Connective::Disjunction => Some(Self::Or(left, right)),
            Connective::Conjunction => Some(Self::And(left, right)),
            Connective::Negation => None,
        }
    }

    /// The main connective of the expression, if the expression is not a symbol.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Self::Literal(_) => None,
            Self::Not(_) => Some(Connective::Negation),
            Self::And(_, _) => Some(Connective::Conjunction),
            Self::Or(_, _) => Some(Connective::Disjunction),
            Self::Implies(_, _) => Some(Connective::Implication),
            Self::Biconditional(_, _) => Some(Connective::Biconditional),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Literal(symbol) => write!(f, "{symbol}"),
            Self::Not(operand) => write!(f, "~{operand}"),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::Biconditional(l, r) => {
                let connective = self.connective().map_or("", |c| c.token());
                write!(f, "({l} {connective} {r})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(name: &str) -> Expression {
        Expression::Literal(Symbol::from_name(name))
    }

    #[test]
    fn leftmost_not_precedence() {
        let expression = Expression::parse("a&b=>c").unwrap();
        assert_eq!(
            expression,
            Expression::And(
                Box::new(literal("a")),
                Box::new(Expression::Implies(
                    Box::new(literal("b")),
                    Box::new(literal("c"))
                ))
            )
        );

        let expression = Expression::parse("a=>b&c").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Implication));
    }

    #[test]
    fn biconditional_before_implication() {
        assert_eq!(
            main_connective("a<=>b"),
            Ok(Split::Binary {
                left: "a",
                connective: Connective::Biconditional,
                right: "b"
            })
        );
    }

    #[test]
    fn negation_binds_operand_only_without_binary() {
        let expression = Expression::parse("~a&b").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Conjunction));

        let expression = Expression::parse("~(a&b)").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Negation));
    }

    #[test]
    fn enclosing() {
        assert_eq!(strip_enclosing("(a&b)"), Some("a&b"));
        assert_eq!(strip_enclosing("(a)&(b)"), None);
        assert_eq!(strip_enclosing("a"), None);
        assert_eq!(Expression::parse("((a))"), Ok(literal("a")));
    }

    #[test]
    fn binary_connectives_only() {
        assert_eq!(
            Expression::binary(Connective::Conjunction, literal("a"), literal("b")),
            Some(Expression::And(Box::new(literal("a")), Box::new(literal("b"))))
        );
        assert_eq!(
            Expression::binary(Connective::Negation, literal("a"), literal("b")),
            None
        );
    }

    #[test]
    fn nesting_bound() {
        assert!(Expression::parse_within("~~a", 3).is_ok());
        assert_eq!(
            Expression::parse_within("~~~a", 3),
            Err(err::ErrorKind::Resource(err::ResourceError::RecursionLimit(3)))
        );
        assert_eq!(
            Expression::parse_within("((a))", 2),
            Err(err::ErrorKind::Resource(err::ResourceError::RecursionLimit(2)))
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Expression::parse("a=>"),
            Err(err::ErrorKind::Parse(err::ParseError::MissingOperand(
                "a=>".to_string(),
                Connective::Implication
            )))
        );
        assert!(matches!(
            Expression::parse("(a&b"),
            Err(err::ErrorKind::Parse(err::ParseError::Unbalanced(_)))
        ));
        assert!(matches!(
            Expression::parse("a)&b"),
            Err(err::ErrorKind::Parse(err::ParseError::Unbalanced(_)))
        ));
        assert!(matches!(
            Expression::parse("p|q"),
            Err(err::ErrorKind::Parse(err::ParseError::InvalidSymbol(_)))
        ));
        assert_eq!(
            Expression::parse("   "),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
    }
}
