//! The methods for deciding entailment.
//!
//! Each method reads the raw clauses of a knowledge base for itself, and so methods share nothing but the text of a knowledge base and a query:
//! - The [truth table](truth_table) method reads each clause as an [expression](crate::structures::expression) and enumerates every valuation.
//! - [Forward chaining](forward) reads each clause as a [Horn clause](crate::structures::rule) and propagates facts through rules.
//! - [Backward chaining](backward) reads each clause as a Horn clause and searches from the query toward the facts.
//! - [DPLL](dpll) reads each clause as a disjunction of [literals](crate::structures::literal) and searches for satisfying valuations.
//!
//! Forward and backward chaining are only correct for definite (Horn) knowledge bases, and refuse any knowledge base containing `<=>`, `||`, or `~`.
//!
//! ```rust
//! # use iengine::{config::Config, procedures::{entails, Method}};
//! let kb = ["p => q", "p"];
//! let report = entails(&kb, "q", Method::FC, &Config::default()).unwrap();
//!
//! assert!(report.entailed());
//! assert_eq!(report.to_string(), "YES: p, q");
//! ```

pub mod backward;
pub mod dpll;
pub mod forward;
pub mod truth_table;

use serde::Serialize;

use crate::{config::Config, reports::Report, types::err::{self}};

/// A method for deciding entailment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum Method {
    /// Enumerate every valuation of the symbols of the knowledge base and query.
    #[value(name = "tt")]
    TT,

    /// Propagate facts through rules until the query is inferred (Horn only).
    #[value(name = "fc")]
    FC,

    /// Search from the query through rules to facts (Horn only).
    #[value(name = "bc")]
    BC,

    /// Search for satisfying valuations of the knowledge base read as clauses.
    #[value(name = "dpll")]
    DPLL,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::TT => write!(f, "TT"),
            Self::FC => write!(f, "FC"),
            Self::BC => write!(f, "BC"),
            Self::DPLL => write!(f, "DPLL"),
        }
    }
}

/// Decides whether the knowledge base entails the query, using the given method.
pub fn entails<S: AsRef<str>>(
    knowledge_base: &[S],
    query: &str,
    method: Method,
    config: &Config,
) -> Result<Report, err::ErrorKind> {
    match method {
        Method::TT => truth_table::check(knowledge_base, query, config),
        Method::FC => forward::check(knowledge_base, query),
        Method::BC => backward::check(knowledge_base, query, config),
        Method::DPLL => dpll::check(knowledge_base, query, config),
    }
}
