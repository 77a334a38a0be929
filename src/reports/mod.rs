/*!
Reports of an entailment check.

A report pairs a verdict with the data supporting the verdict, which depends on the method used:
- The truth table method and DPLL count models.
- Forward and backward chaining trace the symbols inferred, in order of inference.

The [Display](std::fmt::Display) of a report is the line printed by the command line interface.

```rust
# use iengine::{procedures::Method, reports::{Report, Support, Verdict}};
let report = Report {
    method: Method::TT,
    verdict: Verdict::Entailed,
    support: Support::Models(3),
};
assert_eq!(report.to_string(), "YES: 3");
```
*/

use serde::Serialize;

use crate::{procedures::Method, structures::symbol::Symbol};

/// A count of models.
pub type ModelCount = u128;

/// Whether a knowledge base entails a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Entailed,
    NotEntailed,
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Entailed,
            false => Self::NotEntailed,
        }
    }
}

/// Data supporting a verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Support {
    /// A count of models, from the truth table method or DPLL.
    Models(ModelCount),

    /// The symbols inferred, in order, from forward or backward chaining.
    Trace(Vec<Symbol>),
}

/// The result of an entailment check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub method: Method,
    pub verdict: Verdict,
    pub support: Support,
}

impl Report {
    pub fn entailed(&self) -> bool {
        self.verdict == Verdict::Entailed
    }

    /// The count of models, if the report is from a counting method.
    pub fn models(&self) -> Option<ModelCount> {
        match &self.support {
            Support::Models(count) => Some(*count),
            Support::Trace(_) => None,
        }
    }

    /// The symbols inferred, if the report is from a chaining method.
    pub fn trace(&self) -> Option<&[Symbol]> {
        match &self.support {
            Support::Trace(trace) => Some(trace),
            Support::Models(_) => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "YES"),
            Self::NotEntailed => write!(f, "NO"),
        }
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Models(count) => write!(f, "{count}"),
            Self::Trace(trace) => {
                let names = trace.iter().map(Symbol::name).collect::<Vec<_>>();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Verdict::Entailed => write!(f, "{}: {}", self.verdict, self.support),
            Verdict::NotEntailed => write!(f, "{}", self.verdict),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_display() {
        let report = Report {
            method: Method::FC,
            verdict: Verdict::Entailed,
            support: Support::Trace(vec![Symbol::from_name("p"), Symbol::from_name("q")]),
        };
        assert_eq!(report.to_string(), "YES: p, q");
        assert_eq!(report.models(), None);
        assert_eq!(report.trace().map(|t| t.len()), Some(2));
    }

    #[test]
    fn failure_display() {
        let report = Report {
            method: Method::DPLL,
            verdict: Verdict::from(false),
            support: Support::Models(0),
        };
        assert_eq!(report.to_string(), "NO");
        assert!(!report.entailed());
    }
}
