/*!
The Horn database, holding the facts and rules of a definite knowledge base.

A database is built afresh for each use of forward or backward chaining, and rules are accessed through [keys](RuleKey).
In addition to the rules, the database keeps two indices:
- From each symbol to the rules with the symbol as a premise, used by forward chaining.
- From each symbol to the rules with the symbol as conclusion, used by backward chaining.

Before any clause is read the knowledge base is checked for connectives which have no place in a Horn clause.

```rust
# use iengine::db::HornDB;
# use iengine::procedures::Method;
# use iengine::structures::symbol::Symbol;
let kb = ["a", "a & b => c", "a => b"];
let db = HornDB::from_clauses(&kb, Method::FC).unwrap();

let c = Symbol::from_name("c");
assert_eq!(db.rules_with_conclusion(&c).len(), 1);
assert_eq!(db.rules_with_premise(&Symbol::from_name("a")).len(), 2);
assert!(db.is_fact(&Symbol::from_name("a")));
assert!(!db.is_cyclic());

assert!(HornDB::from_clauses(&["a || b"], Method::BC).is_err());
```
*/

mod keys;
pub use keys::RuleKey;

use std::collections::{HashMap, HashSet};

use petgraph::{algo::is_cyclic_directed, graph::DiGraph, graph::NodeIndex};
use slotmap::SlotMap;

use crate::{
    misc::log::targets::{self},
    procedures::Method,
    structures::{
        expression::Connective,
        rule::{HornClause, Rule},
        symbol::Symbol,
    },
    types::err::{self},
};

/// The connectives which may not occur in a Horn knowledge base.
pub const NON_HORN_CONNECTIVES: [Connective; 3] = [
    Connective::Biconditional,
    Connective::Disjunction,
    Connective::Negation,
];

/// Facts and rules, with indices from symbols to rules.
#[derive(Clone, Debug, Default)]
pub struct HornDB {
    facts: Vec<Symbol>,
    fact_set: HashSet<Symbol>,

    rules: SlotMap<RuleKey, Rule>,
    rule_order: Vec<RuleKey>,

    by_premise: HashMap<Symbol, Vec<RuleKey>>,
    by_conclusion: HashMap<Symbol, Vec<RuleKey>>,
}

/// The connectives from [NON_HORN_CONNECTIVES] which occur somewhere in the given clauses.
pub fn non_horn_connectives<S: AsRef<str>>(clauses: &[S]) -> Vec<Connective> {
    NON_HORN_CONNECTIVES
        .into_iter()
        .filter(|connective| {
            clauses
                .iter()
                .any(|clause| clause.as_ref().contains(connective.token()))
        })
        .collect()
}

impl HornDB {
    /// Builds a database from a knowledge base, on behalf of the given method.
    ///
    /// Fails before reading any clause if the knowledge base contains a connective from [NON_HORN_CONNECTIVES].
    pub fn from_clauses<S: AsRef<str>>(clauses: &[S], method: Method) -> Result<Self, err::ErrorKind> {
        let unsupported = non_horn_connectives(clauses);
        if !unsupported.is_empty() {
            log::warn!(target: targets::HORN_DB, "{method} given connectives {unsupported:?}");
            return Err(err::ErrorKind::from(err::MethodError::UnsupportedConnectives(
                method,
                unsupported,
            )));
        }

        let mut db = HornDB::default();
        for clause in clauses {
            match HornClause::parse(clause.as_ref())? {
                HornClause::Facts(facts) => facts.into_iter().for_each(|fact| db.add_fact(fact)),
                HornClause::Rule(rule) => {
                    db.add_rule(rule);
                }
            }
        }

        log::debug!(target: targets::HORN_DB, "{} facts and {} rules", db.facts.len(), db.rule_count());
        Ok(db)
    }

    /// Adds a fact to the database, if the fact is not already present.
    pub fn add_fact(&mut self, fact: Symbol) {
        if self.fact_set.insert(fact.clone()) {
            self.facts.push(fact);
        }
    }

    /// Adds a rule to the database, and indexes the rule by premise and conclusion.
    pub fn add_rule(&mut self, rule: Rule) -> RuleKey {
        let premises = rule.premises().to_vec();
        let conclusion = rule.conclusion().clone();

        let key = self.rules.insert(rule);
        self.rule_order.push(key);

        for premise in premises {
            self.by_premise.entry(premise).or_default().push(key);
        }
        self.by_conclusion.entry(conclusion).or_default().push(key);

        key
    }

    /// The facts of the database, in order of addition.
    pub fn facts(&self) -> &[Symbol] {
        &self.facts
    }

    pub fn is_fact(&self, symbol: &Symbol) -> bool {
        self.fact_set.contains(symbol)
    }

    pub fn rule(&self, key: RuleKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn rule_mut(&mut self, key: RuleKey) -> Option<&mut Rule> {
        self.rules.get_mut(key)
    }

    /// The rules of the database, in order of addition.
    pub fn rules(&self) -> impl Iterator<Item = (RuleKey, &Rule)> {
        self.rule_order
            .iter()
            .filter_map(|key| self.rules.get(*key).map(|rule| (*key, rule)))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Keys to the rules with the symbol as a premise, in order of addition.
    pub fn rules_with_premise(&self, symbol: &Symbol) -> &[RuleKey] {
        self.by_premise.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }

    /// Keys to the rules with the symbol as conclusion, in order of addition.
    pub fn rules_with_conclusion(&self, symbol: &Symbol) -> &[RuleKey] {
        self.by_conclusion.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }

    /// The dependency graph of the rules, with an edge from each premise of a rule to the conclusion of the rule.
    pub fn dependency_graph(&self) -> DiGraph<Symbol, RuleKey> {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<&Symbol, NodeIndex> = HashMap::new();

        for (key, rule) in self.rules() {
            let conclusion = *nodes
                .entry(rule.conclusion())
                .or_insert_with(|| graph.add_node(rule.conclusion().clone()));

            for premise in rule.premises() {
                let from = *nodes
                    .entry(premise)
                    .or_insert_with(|| graph.add_node(premise.clone()));
                graph.add_edge(from, conclusion, key);
            }
        }

        graph
    }

    /// Whether some symbol depends on itself through the rules of the database.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.dependency_graph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_connectives_are_listed() {
        let kb = ["a <=> b", "~c", "a => b"];
        assert_eq!(
            HornDB::from_clauses(&kb, Method::FC).unwrap_err(),
            err::ErrorKind::Method(err::MethodError::UnsupportedConnectives(
                Method::FC,
                vec![Connective::Biconditional, Connective::Negation]
            ))
        );
    }

    #[test]
    fn conjunction_of_facts() {
        let db = HornDB::from_clauses(&["a & b", "b", "c"], Method::BC).unwrap();
        let names = db.facts().iter().map(Symbol::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(db.rule_count(), 0);
    }

    #[test]
    fn rules_are_counted() {
        let db = HornDB::from_clauses(&["a", "a => b", "a & b => c", "a => b"], Method::FC).unwrap();
        assert_eq!(db.rule_count(), 3);
        assert_eq!(db.rules().count(), db.rule_count());
    }

    #[test]
    fn cycles() {
        let db = HornDB::from_clauses(&["p => q", "q => p"], Method::BC).unwrap();
        assert!(db.is_cyclic());
        assert_eq!(db.dependency_graph().edge_count(), 2);

        let db = HornDB::from_clauses(&["p => p"], Method::BC).unwrap();
        assert!(db.is_cyclic());
    }

    #[test]
    fn malformed_clause() {
        assert!(matches!(
            HornDB::from_clauses(&["a", "=> b"], Method::FC),
            Err(err::ErrorKind::Parse(err::ParseError::MissingOperand(_, _)))
        ));
    }
}
