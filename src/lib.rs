//! A library for deciding whether a propositional knowledge base entails a query.
//!
//! iengine decides entailment by one of four interchangeable [methods](crate::procedures::Method):
//! - Enumeration of a [truth table](crate::procedures::truth_table).
//! - [Forward chaining](crate::procedures::forward), for Horn knowledge bases.
//! - [Backward chaining](crate::procedures::backward), for Horn knowledge bases.
//! - A [DPLL](crate::procedures::dpll) search, for knowledge bases of clauses.
//!
//! # Orientation
//!
//! A knowledge base is given as a slice of clauses, each clause some text, and a query is given as text.
//! Each method reads the text as it requires: as [expressions](crate::structures::expression) for the truth table method, as [Horn clauses](crate::structures::rule) for chaining, and as [clauses](crate::structures::clause) of literals for DPLL.
//!
//! The result of a method is a [report](crate::reports::Report), pairing a verdict with supporting data: a count of models, or the symbols inferred.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect each method.
//! - The [structures] to familiarise yourself with the readings of a clause.
//! - The [configuration](crate::config) to see what may be adjusted.
//!
//! # Syntax
//!
//! Symbols are one or more letters followed by zero or more digits.
//!
//! | Connective | Text |
//! |---|---|
//! | Negation | `~` (and `-` within DPLL clauses) |
//! | Conjunction | `&` |
//! | Disjunction | `\|\|` (and `\|` within DPLL clauses) |
//! | Implication | `=>` |
//! | Biconditional | `<=>` |
//!
//! Expressions are split at the leftmost binary connective outside of parentheses, without regard to any precedence between connectives.
//! So, parenthesise where it matters.
//!
//! # Examples
//!
//! ```rust
//! # use iengine::{config::Config, procedures::{entails, Method}};
//! let kb = ["p2 => p3", "p3 => p1", "c => e", "b & e => f", "f & g => h",
//!           "p1 => d", "p1 & p3 => c", "a", "b", "p2"];
//! let config = Config::default();
//!
//! assert_eq!(entails(&kb, "d", Method::TT, &config).unwrap().to_string(), "YES: 3");
//! assert_eq!(entails(&kb, "d", Method::FC, &config).unwrap().to_string(), "YES: a, b, p2, p3, p1, d");
//! assert_eq!(entails(&kb, "d", Method::BC, &config).unwrap().to_string(), "YES: p2, p3, p1, d");
//! ```
//!
//! ```rust
//! # use iengine::{config::Config, procedures::{entails, Method}};
//! let kb = ["p || q"];
//! let report = entails(&kb, "p", Method::TT, &Config::default()).unwrap();
//! assert!(!report.entailed());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No logger is installed by the library.

pub mod config;
pub mod db;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
