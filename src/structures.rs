//! The abstract elements of entailment and their representation.
//!
//! A single clause of text is read in one of three ways, depending on the method used:
//! - As an [expression](expression), by the truth table method.
//! - As a [Horn clause](rule), by forward and backward chaining.
//! - As a [clause](clause) of [literals](literal), by DPLL.
//!
//! Each reading has its own parser, and the readings share only the text.

pub mod clause;
pub mod expression;
pub mod literal;
pub mod rule;
pub mod symbol;
pub mod valuation;
