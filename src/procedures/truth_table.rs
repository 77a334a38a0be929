/*!
The truth table method.

The symbols of the knowledge base and query are found by a scan of the text, and every valuation of those symbols is enumerated.
Valuations are enumerated by counting down in binary, with the first symbol (by order of occurrence) as the most significant bit.
So, the first valuation makes every symbol true and the last valuation makes every symbol false.

On each valuation each clause and the query is evaluated, and:
- A valuation on which every clause and the query is true is *valid*, and counted.
- A valuation on which every clause is true and the query is false is a counterexample.

The knowledge base entails the query iff there are no counterexamples.
The count of valid valuations is reported regardless.

```rust
# use iengine::{config::Config, procedures::truth_table::TruthTable};
let table = TruthTable::new(&["p || q"], "p", &Config::default()).unwrap();
let mut rows = 0;
let report = table.check(|_row| rows += 1);

assert_eq!(rows, 4);
assert_eq!(report.models(), Some(2));
assert!(!report.entailed());
```
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::Method,
    reports::{ModelCount, Report, Support, Verdict},
    structures::{
        expression::Expression,
        symbol::Symbol,
        valuation::Model,
    },
    types::err::{self},
};

/// A knowledge base and query, read as expressions, together with the symbols to enumerate valuations over.
pub struct TruthTable {
    symbols: Vec<Symbol>,
    clauses: Vec<Expression>,
    query: Expression,
}

/// A single valuation, with the value of each clause and the query on the valuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// The value of each symbol, in the order of [TruthTable::symbols].
    pub values: Vec<bool>,

    /// The value of each clause of the knowledge base.
    pub clauses: Vec<bool>,

    /// The value of the query.
    pub query: bool,

    /// Whether every clause and the query is true.
    pub valid: bool,
}

impl Row {
    /// Whether every clause is true while the query is false.
    pub fn counterexample(&self) -> bool {
        !self.query && self.clauses.iter().all(|value| *value)
    }
}

impl TruthTable {
    /// Reads the knowledge base and query, and collects the symbols occurring in either.
    ///
    /// Fails if some clause is malformed or nested deeper than the configured recursion limit, or if there are more symbols than the configured limit.
    pub fn new<S: AsRef<str>>(
        knowledge_base: &[S],
        query: &str,
        config: &Config,
    ) -> Result<Self, err::ErrorKind> {
        let symbols = Symbol::scan_all(
            knowledge_base
                .iter()
                .map(|clause| clause.as_ref())
                .chain(std::iter::once(query)),
        );

        let limit = config.symbol_limit.value;
        if symbols.len() > limit {
            log::error!(target: targets::TRUTH_TABLE, "{} symbols over limit {limit}", symbols.len());
            return Err(err::ErrorKind::from(err::ResourceError::SymbolLimit {
                symbols: symbols.len(),
                limit,
            }));
        }

        let depth_limit = config.recursion_limit.value;
        let clauses = knowledge_base
            .iter()
            .map(|clause| Expression::parse_within(clause.as_ref(), depth_limit))
            .collect::<Result<Vec<_>, _>>()?;

        let query = Expression::parse_within(query, depth_limit)?;

        Ok(TruthTable {
            symbols,
            clauses,
            query,
        })
    }

    /// The symbols of the table, in order of first occurrence in the knowledge base and then the query.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The number of valuations enumerated by the table.
    pub fn row_count(&self) -> ModelCount {
        1 << self.symbols.len()
    }

    /// The valuation with the given index, as a model.
    fn model(&self, index: ModelCount) -> Model {
        let width = self.symbols.len();
        self.symbols
            .iter()
            .enumerate()
            .map(|(position, symbol)| (symbol.clone(), (index >> (width - 1 - position)) & 1 == 0))
            .collect()
    }

    /// An iterator over every row of the table, in enumeration order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.row_count()).map(|index| {
            let model = self.model(index);

            let values = self
                .symbols
                .iter()
                .map(|symbol| model.get(symbol).copied().unwrap_or(false))
                .collect();

            let clauses: Vec<bool> = self
                .clauses
                .iter()
                .map(|clause| clause.evaluate(&model))
                .collect();

            let query = self.query.evaluate(&model);
            let valid = query && clauses.iter().all(|value| *value);

            Row {
                values,
                clauses,
                query,
                valid,
            }
        })
    }

    /// Enumerates every row, passing each row to the observer, and reports on entailment.
    pub fn check(&self, mut observer: impl FnMut(&Row)) -> Report {
        let mut valid: ModelCount = 0;
        let mut counterexamples: ModelCount = 0;

        for row in self.rows() {
            if row.valid {
                valid += 1;
            } else if row.counterexample() {
                log::trace!(target: targets::TRUTH_TABLE, "Counterexample {:?}", row.values);
                counterexamples += 1;
            }
            observer(&row);
        }

        log::debug!(target: targets::TRUTH_TABLE, "{valid} valid, {counterexamples} counterexamples over {} symbols", self.symbols.len());

        Report {
            method: Method::TT,
            verdict: Verdict::from(counterexamples == 0),
            support: Support::Models(valid),
        }
    }
}

/// Decides entailment by the truth table method.
pub fn check<S: AsRef<str>>(
    knowledge_base: &[S],
    query: &str,
    config: &Config,
) -> Result<Report, err::ErrorKind> {
    Ok(TruthTable::new(knowledge_base, query, config)?.check(|_| {}))
}
