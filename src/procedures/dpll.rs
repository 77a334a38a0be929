/*!
A recursive DPLL search, with unit propagation and (optionally) pure literal elimination.

Each clause of the knowledge base is read as a disjunction of literals, e.g. `p | -q | r`.
The search is over a collection of clauses and a partial assignment, where:
1. If no clauses remain, the assignment (with any free symbols) satisfies the clauses.
2. If some clause is empty, the assignment falsifies the clause.
3. Otherwise, if some clause is a unit, the literal of the clause is assigned true.
4. Otherwise, if some literal is pure (its negation occurs in no clause), the literal is assigned true.
5. Otherwise, the first literal of the first clause is assigned true on one branch and false on another.

Assigning a literal true removes each clause containing the literal, and removes the negation of the literal from every other clause.
Each recursive call receives its own copy of the assignment, extended by one literal.

# Counts

A satisfying leaf of the search contributes 2<sup>k</sup> models, where *k* is the number of symbols (of the knowledge base and query) without a value at the leaf.
A [counting](Dpll::counting) search never settles pure literals, and so visits every satisfying valuation and the total is the exact count of models.
A [deciding](Dpll::deciding) search settles pure literals when configured to, skipping valuations on which a pure literal is false, and only satisfiability is read from it.

```rust
# use iengine::{config::Config, procedures::dpll::solve};
let search = solve(&["p | q", "-p | r"], &Config::default()).unwrap();
assert!(search.satisfiable);
assert_eq!(search.models, 4);
```

# Entailment

With the (default) [refutation framing](crate::config::Framing::Refutation) the knowledge base entails the query iff the knowledge base together with the negation of the query is unsatisfiable.
With the satisfiability framing the knowledge base 'entails' the query iff the knowledge base together with the query is satisfiable.
In either case, the count reported is from a counting search of the knowledge base together with the query.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    config::{Config, Framing},
    misc::log::targets::{self},
    procedures::Method,
    reports::{ModelCount, Report, Support, Verdict},
    structures::{
        clause::{parse_clause, CClause, Clause},
        literal::Literal,
        symbol::Symbol,
    },
    types::err::{self},
};

/// A partial assignment of values to symbols.
pub type Assignment = HashMap<Symbol, bool>;

/// The result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    pub satisfiable: bool,
    pub models: ModelCount,
}

impl Search {
    const UNSATISFIABLE: Search = Search {
        satisfiable: false,
        models: 0,
    };

    fn join(self, other: Search) -> Search {
        Search {
            satisfiable: self.satisfiable || other.satisfiable,
            models: self.models.saturating_add(other.models),
        }
    }
}

/// A search over some universe of symbols.
pub struct Dpll {
    universe: usize,
    pure_literals: bool,
    limit: usize,
}

/// The first literal, by order of occurrence, whose negation does not occur in any clause.
pub fn pure_literal(clauses: &[CClause]) -> Option<&Literal> {
    let occurring = clauses
        .iter()
        .flat_map(|clause| clause.literals())
        .collect::<HashSet<_>>();

    clauses
        .iter()
        .flat_map(|clause| clause.literals())
        .find(|literal| !occurring.contains(&literal.negate()))
}

/// The first unit clause, if some clause is a unit.
pub fn unit_literal(clauses: &[CClause]) -> Option<&Literal> {
    clauses
        .iter()
        .find(|clause| clause.size() == 1)
        .and_then(|clause| clause.first())
}

impl Dpll {
    /// A search for satisfiability over a universe of the given number of symbols, settling pure literals if configured to.
    pub fn deciding(universe: usize, config: &Config) -> Self {
        Dpll {
            universe,
            pure_literals: config.pure_literals.value,
            limit: config.recursion_limit.value,
        }
    }

    /// A search where models are counted exactly over a universe of the given number of symbols.
    pub fn counting(universe: usize, config: &Config) -> Self {
        Dpll {
            universe,
            pure_literals: false,
            limit: config.recursion_limit.value,
        }
    }

    /// Searches for assignments which extend the given assignment and satisfy the clauses.
    pub fn search(&self, clauses: &[CClause], assignment: &Assignment) -> Result<Search, err::ErrorKind> {
        self.search_at(clauses, assignment, 0)
    }

    fn search_at(
        &self,
        clauses: &[CClause],
        assignment: &Assignment,
        depth: usize,
    ) -> Result<Search, err::ErrorKind> {
        if clauses.is_empty() {
            let free = self.universe.saturating_sub(assignment.len());
            let models = u32::try_from(free)
                .ok()
                .and_then(|free| ModelCount::from(1_u8).checked_shl(free))
                .unwrap_or(ModelCount::MAX);
            log::trace!(target: targets::DPLL, "Satisfied with {free} free symbols");
            return Ok(Search {
                satisfiable: true,
                models,
            });
        }

        if clauses.iter().any(|clause| clause.is_empty()) {
            return Ok(Search::UNSATISFIABLE);
        }

        if depth >= self.limit {
            log::error!(target: targets::DPLL, "Depth {depth} reached");
            return Err(err::ErrorKind::from(err::ResourceError::RecursionLimit(
                self.limit,
            )));
        }

        if let Some(unit) = unit_literal(clauses) {
            log::trace!(target: targets::DPLL, "Unit {unit}");
            return self.assign(clauses, assignment, unit.clone(), depth);
        }

        if self.pure_literals {
            if let Some(pure) = pure_literal(clauses) {
                log::trace!(target: targets::DPLL, "Pure {pure}");
                return self.assign(clauses, assignment, pure.clone(), depth);
            }
        }

        let choice = clauses[0][0].clone();
        log::trace!(target: targets::DPLL, "Branch on {choice} at depth {depth}");

        let positive = self.assign(clauses, assignment, choice.clone(), depth)?;
        let negative = self.assign(clauses, assignment, choice.negate(), depth)?;
        Ok(positive.join(negative))
    }

    /// Continues the search with the literal assigned true.
    fn assign(
        &self,
        clauses: &[CClause],
        assignment: &Assignment,
        literal: Literal,
        depth: usize,
    ) -> Result<Search, err::ErrorKind> {
        let simplified = clauses
            .iter()
            .filter_map(|clause| clause.simplify(&literal))
            .collect::<Vec<_>>();

        let mut extended = assignment.clone();
        extended.insert(literal.symbol().clone(), literal.polarity());

        self.search_at(&simplified, &extended, depth + 1)
    }
}

/// Reads each clause, and returns the clauses which are not tautologies together with the number of distinct symbols in all clauses.
fn read_clauses<S: AsRef<str>>(clauses: &[S]) -> Result<(Vec<CClause>, HashSet<Symbol>), err::ErrorKind> {
    let mut symbols = HashSet::new();
    let mut kept = Vec::with_capacity(clauses.len());

    for text in clauses {
        let clause = parse_clause(text.as_ref())?;
        symbols.extend(clause.symbols().cloned());
        match clause.is_tautology() {
            true => log::trace!(target: targets::DPLL, "Skipped tautology {}", clause.as_string()),
            false => kept.push(clause),
        }
    }

    Ok((kept, symbols))
}

/// Searches for models of the clauses, counted exactly over the symbols of the clauses.
pub fn solve<S: AsRef<str>>(clauses: &[S], config: &Config) -> Result<Search, err::ErrorKind> {
    let (clauses, symbols) = read_clauses(clauses)?;
    Dpll::counting(symbols.len(), config).search(&clauses, &Assignment::default())
}

/// Decides entailment by DPLL.
///
/// The query is read as a clause, typically a single literal.
pub fn check<S: AsRef<str>>(
    knowledge_base: &[S],
    query: &str,
    config: &Config,
) -> Result<Report, err::ErrorKind> {
    let (clauses, mut symbols) = read_clauses(knowledge_base)?;
    let query = parse_clause(query)?;
    symbols.extend(query.symbols().cloned());

    let deciding = Dpll::deciding(symbols.len(), config);
    let counting = Dpll::counting(symbols.len(), config);

    let mut with_query = clauses.clone();
    with_query.push(query.clone());

    let verdict = match config.framing.value {
        Framing::Satisfiability => deciding.search(&with_query, &Assignment::default())?.satisfiable,

        Framing::Refutation => {
            let mut refutation = clauses;
            refutation.extend(query.literals().map(|literal| vec![literal.negate()]));
            let counter = deciding.search(&refutation, &Assignment::default())?;
            log::debug!(target: targets::DPLL, "Refutation satisfiable: {}", counter.satisfiable);
            !counter.satisfiable
        }
    };

    let models = counting.search(&with_query, &Assignment::default())?.models;
    log::debug!(target: targets::DPLL, "{models} models of the knowledge base and query");

    Ok(Report {
        method: Method::DPLL,
        verdict: Verdict::from(verdict),
        support: Support::Models(models),
    })
}
