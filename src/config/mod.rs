/*!
Configuration of the methods.

All configuration is contained within a [Config], and each method reads only the options relevant to it.
The default configuration gives the conventional behaviour of each method.

```rust
# use iengine::config::{Config, CycleGuard};
let mut config = Config::default();
config.cycle_guard.value = CycleGuard::Scoped;

assert_eq!(config.symbol_limit.value, 24);
assert!(config.pure_literals.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;
pub mod defaults;

use serde::Serialize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The greatest number of symbols the truth table method will enumerate valuations for.
    pub symbol_limit: ConfigOption<usize>,

    /// The greatest depth of recursion permitted when reading expressions, and to backward chaining and DPLL.
    pub recursion_limit: ConfigOption<usize>,

    /// How backward chaining guards against cyclic rules.
    pub cycle_guard: ConfigOption<CycleGuard>,

    /// Permit DPLL to settle pure literals when deciding a verdict. Model counts are exact regardless.
    pub pure_literals: ConfigOption<bool>,

    /// How DPLL turns a search into a verdict.
    pub framing: ConfigOption<Framing>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symbol_limit: ConfigOption {
                name: "symbol_limit",
                min: 0,
                max: defaults::MAX_SYMBOL_LIMIT,
                value: defaults::SYMBOL_LIMIT,
            },

            recursion_limit: ConfigOption {
                name: "recursion_limit",
                min: 1,
                max: defaults::MAX_RECURSION_LIMIT,
                value: defaults::RECURSION_LIMIT,
            },

            cycle_guard: ConfigOption {
                name: "cycle_guard",
                min: CycleGuard::MIN,
                max: CycleGuard::MAX,
                value: CycleGuard::Permanent,
            },

            pure_literals: ConfigOption {
                name: "pure_literals",
                min: false,
                max: true,
                value: true,
            },

            framing: ConfigOption {
                name: "framing",
                min: Framing::MIN,
                max: Framing::MAX,
                value: Framing::Refutation,
            },
        }
    }
}

/// The policy for symbols marked as being explored during backward chaining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CycleGuard {
    #[default]
    /// A symbol once explored is never explored again.
    /// Goals which meet a cycle are unprovable, even if some other route would prove them.
    Permanent,

    /// A symbol is unmarked when its exploration ends, so only the active path is guarded.
    Scoped,
}

impl CycleGuard {
    pub const MIN: CycleGuard = CycleGuard::Permanent;
    pub const MAX: CycleGuard = CycleGuard::Scoped;
}

impl std::fmt::Display for CycleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Permanent => write!(f, "permanent"),
            Self::Scoped => write!(f, "scoped"),
        }
    }
}

/// How the result of a DPLL search is read as an entailment verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Framing {
    #[default]
    /// The knowledge base entails the query iff the knowledge base together with the negated query is unsatisfiable.
    Refutation,

    /// The knowledge base 'entails' the query iff the knowledge base together with the query is satisfiable.
    Satisfiability,
}

impl Framing {
    pub const MIN: Framing = Framing::Refutation;
    pub const MAX: Framing = Framing::Satisfiability;
}

impl std::fmt::Display for Framing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Refutation => write!(f, "refutation"),
            Self::Satisfiability => write!(f, "satisfiability"),
        }
    }
}
