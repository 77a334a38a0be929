/*!
Forward chaining.

A queue is initialised with the facts of the knowledge base.
Until the queue is empty, a symbol is taken from the front of the queue and noted as inferred.
Each rule with the symbol as a premise has its count of unsatisfied premises lowered, and when the count of a rule reaches zero the conclusion of the rule is added to the back of the queue.

Once the query has been inferred the method stops, and the symbols inferred are reported in order of inference.
If the queue empties first, the query is not entailed.

```rust
# use iengine::procedures::forward::check;
let report = check(&["a", "b", "a & b => c", "c => d"], "d").unwrap();
assert_eq!(report.to_string(), "YES: a, b, c, d");
```

A symbol taken from the queue a second time is skipped, and so each premise of a rule is satisfied at most once.
*/

use std::collections::{HashSet, VecDeque};

use crate::{
    db::HornDB,
    misc::log::targets::{self},
    procedures::Method,
    reports::{Report, Support, Verdict},
    structures::symbol::Symbol,
    types::err::{self},
};

/// Decides entailment by forward chaining.
pub fn check<S: AsRef<str>>(knowledge_base: &[S], query: &str) -> Result<Report, err::ErrorKind> {
    let mut db = HornDB::from_clauses(knowledge_base, Method::FC)?;
    let query = Symbol::parse(query.trim())?;

    let mut queue = db.facts().iter().cloned().collect::<VecDeque<_>>();
    let mut inferred: HashSet<Symbol> = HashSet::default();
    let mut trace: Vec<Symbol> = Vec::default();

    while let Some(symbol) = queue.pop_front() {
        if !inferred.insert(symbol.clone()) {
            continue;
        }
        log::trace!(target: targets::FORWARD, "Inferred {symbol}");

        let keys = db.rules_with_premise(&symbol).to_vec();
        for key in keys {
            if let Some(rule) = db.rule_mut(key) {
                if rule.satisfy_premise() {
                    log::trace!(target: targets::FORWARD, "Fired {rule}");
                    queue.push_back(rule.conclusion().clone());
                }
            }
        }

        trace.push(symbol);

        if inferred.contains(&query) {
            log::debug!(target: targets::FORWARD, "{query} inferred after {} symbols", trace.len());
            return Ok(Report {
                method: Method::FC,
                verdict: Verdict::Entailed,
                support: Support::Trace(trace),
            });
        }
    }

    log::debug!(target: targets::FORWARD, "Queue exhausted after {} symbols", trace.len());
    Ok(Report {
        method: Method::FC,
        verdict: Verdict::NotEntailed,
        support: Support::Trace(trace),
    })
}
