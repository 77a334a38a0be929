/*!
Backward chaining.

The query is proved by a recursive search, where a symbol is proved if:
- The symbol has already been inferred, or
- The symbol is a fact, or
- For some rule with the symbol as conclusion, every premise of the rule is proved.

Symbols are inferred in the order their proofs complete, and on success these are reported.

# Cycles

While a symbol is being explored it is marked, and a marked symbol is not explored again, so the search terminates on cyclic rules.
What happens to the mark when exploration ends is [configurable](crate::config::CycleGuard):
- By default the mark is permanent.
  A symbol which fails once (perhaps as a cycle was met on the active path) is never explored again, and the search may miss proofs found by [forward chaining](crate::procedures::forward).
- With a scoped guard the mark is removed when exploration ends, and the search finds every symbol forward chaining does.

```rust
# use iengine::{config::{Config, CycleGuard}, procedures::backward::check};
let kb = ["e", "d => a", "a => d", "e => a", "a & d => q"];
let mut config = Config::default();

assert!(!check(&kb, "q", &config).unwrap().entailed());

config.cycle_guard.value = CycleGuard::Scoped;
assert!(check(&kb, "q", &config).unwrap().entailed());
```
*/

use std::collections::HashSet;

use crate::{
    config::{Config, CycleGuard},
    db::HornDB,
    misc::log::targets::{self},
    procedures::Method,
    reports::{Report, Support, Verdict},
    structures::symbol::Symbol,
    types::err::{self},
};

/// The state of a single backward chaining search.
struct Search<'db> {
    db: &'db HornDB,
    guard: CycleGuard,
    limit: usize,

    inferred: HashSet<Symbol>,
    trace: Vec<Symbol>,
    exploring: HashSet<Symbol>,
}

impl Search<'_> {
    fn infer(&mut self, symbol: &Symbol) {
        if self.inferred.insert(symbol.clone()) {
            log::trace!(target: targets::BACKWARD, "Inferred {symbol}");
            self.trace.push(symbol.clone());
        }
    }

    fn prove(&mut self, symbol: &Symbol, depth: usize) -> Result<bool, err::ErrorKind> {
        if self.inferred.contains(symbol) {
            return Ok(true);
        }

        if self.db.is_fact(symbol) {
            self.infer(symbol);
            return Ok(true);
        }

        if self.exploring.contains(symbol) {
            log::trace!(target: targets::BACKWARD, "{symbol} already explored");
            return Ok(false);
        }

        if depth >= self.limit {
            log::error!(target: targets::BACKWARD, "Depth {depth} reached at {symbol}");
            return Err(err::ErrorKind::from(err::ResourceError::RecursionLimit(
                self.limit,
            )));
        }

        self.exploring.insert(symbol.clone());

        let db = self.db;
        let mut proved = false;

        'rule_search: for key in db.rules_with_conclusion(symbol) {
            let Some(rule) = db.rule(*key) else {
                continue 'rule_search;
            };

            for premise in rule.premises() {
                if !self.prove(premise, depth + 1)? {
                    continue 'rule_search;
                }
            }

            self.infer(symbol);
            proved = true;
            break 'rule_search;
        }

        if self.guard == CycleGuard::Scoped {
            self.exploring.remove(symbol);
        }

        Ok(proved)
    }
}

/// Decides entailment by backward chaining.
pub fn check<S: AsRef<str>>(
    knowledge_base: &[S],
    query: &str,
    config: &Config,
) -> Result<Report, err::ErrorKind> {
    let db = HornDB::from_clauses(knowledge_base, Method::BC)?;
    let query = Symbol::parse(query.trim())?;

    let guard = config.cycle_guard.value;
    if guard == CycleGuard::Permanent && db.is_cyclic() {
        log::warn!(target: targets::BACKWARD, "Cyclic rules with a permanent guard, some proofs may be missed");
    }

    let mut search = Search {
        db: &db,
        guard,
        limit: config.recursion_limit.value,
        inferred: HashSet::default(),
        trace: Vec::default(),
        exploring: HashSet::default(),
    };

    let proved = search.prove(&query, 0)?;
    log::debug!(target: targets::BACKWARD, "{query} proved: {proved}, {} symbols inferred", search.trace.len());

    Ok(Report {
        method: Method::BC,
        verdict: Verdict::from(proved),
        support: Support::Trace(search.trace),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_alone_is_unprovable() {
        let report = check(&["p => q", "q => p"], "p", &Config::default()).unwrap();
        assert!(!report.entailed());
        assert_eq!(report.trace(), Some([].as_slice()));
    }

    #[test]
    fn trace_is_in_order_of_proof() {
        let report = check(&["b => c", "a => b", "a"], "c", &Config::default()).unwrap();
        assert_eq!(report.to_string(), "YES: a, b, c");
    }

    #[test]
    fn later_rule_is_tried() {
        let kb = ["x => q", "y => q", "y"];
        let report = check(&kb, "q", &Config::default()).unwrap();
        assert_eq!(report.to_string(), "YES: y, q");
    }

    #[test]
    fn recursion_limit() {
        let mut config = Config::default();
        config.recursion_limit.value = 2;
        let kb = ["a", "a => b", "b => c", "c => d"];
        assert_eq!(
            check(&kb, "d", &config).err(),
            Some(err::ErrorKind::Resource(err::ResourceError::RecursionLimit(2)))
        );
    }
}
