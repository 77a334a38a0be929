use iengine::{
    config::{defaults, Config, Framing},
    procedures::{dpll::solve, entails, Method},
    types::err::{self},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn without_pure_literals() -> Config {
    let mut config = Config::default();
    config.pure_literals.value = false;
    config
}

mod basic {
    use super::*;

    #[test]
    fn two_clauses() {
        let search = solve(&["p|q", "-p|r"], &without_pure_literals()).unwrap();
        assert!(search.satisfiable);
        assert_eq!(search.models, 4);
    }

    #[test]
    fn pure_literals_keep_the_count() {
        let search = solve(&["p|q", "-p|r"], &Config::default()).unwrap();
        assert!(search.satisfiable);
        assert_eq!(search.models, 4);
    }

    #[test]
    fn default_count_matches_truth_table() {
        let config = Config::default();

        let dpll = entails(&["p|q", "-p|r"], "p", Method::DPLL, &config).unwrap();
        let truth_table = entails(&["p||q", "~p||r"], "p", Method::TT, &config).unwrap();

        assert!(!dpll.entailed());
        assert_eq!(dpll.models(), Some(2));
        assert_eq!(dpll.models(), truth_table.models());
    }

    #[test]
    fn tautologies_leave_symbols_free() {
        let search = solve(&["a|-a", "b||~b"], &Config::default()).unwrap();
        assert!(search.satisfiable);
        assert_eq!(search.models, 4);
    }

    #[test]
    fn malformed_clause() {
        assert!(matches!(
            solve(&["p|"], &Config::default()),
            Err(err::ErrorKind::Parse(err::ParseError::MissingOperand(_, _)))
        ));
        assert!(matches!(
            solve(&["p => q"], &Config::default()),
            Err(err::ErrorKind::Parse(err::ParseError::InvalidSymbol(_)))
        ));
    }
}

mod framing {
    use super::*;

    #[test]
    fn refutation() {
        let config = Config::default();

        let report = entails(&["p", "-p|r"], "r", Method::DPLL, &config).unwrap();
        assert_eq!(report.to_string(), "YES: 1");

        let report = entails(&["p|q", "-p|r"], "r", Method::DPLL, &config).unwrap();
        assert!(!report.entailed());
    }

    #[test]
    fn satisfiability() {
        let mut config = Config::default();
        config.framing.value = Framing::Satisfiability;

        let report = entails(&["p|q"], "-p", Method::DPLL, &config).unwrap();
        assert_eq!(report.to_string(), "YES: 1");

        config.framing.value = Framing::Refutation;
        let report = entails(&["p|q"], "-p", Method::DPLL, &config).unwrap();
        assert_eq!(report.to_string(), "NO");
    }

    #[test]
    fn unsatisfiable_base_entails_anything() {
        let report = entails(&["p", "-p"], "q", Method::DPLL, &Config::default()).unwrap();
        assert!(report.entailed());
        assert_eq!(report.models(), Some(0));
    }

    #[test]
    fn checks_are_repeatable() {
        let config = Config::default();
        let kb = ["a|b|c", "-a|b", "-b|c"];
        let first = entails(&kb, "c", Method::DPLL, &config).unwrap();
        let second = entails(&kb, "c", Method::DPLL, &config).unwrap();
        assert_eq!(first, second);
        assert!(first.entailed());
    }
}

mod agreement {
    use super::*;

    const SYMBOLS: [&str; 5] = ["a", "b", "c", "d", "e"];

    /// A random knowledge base of clauses, as text for both DPLL and the truth table method.
    fn random_cnf(rng: &mut StdRng) -> (Vec<String>, Vec<String>) {
        let mut dpll_kb = Vec::default();
        let mut tt_kb = Vec::default();

        for _ in 0..rng.gen_range(1..6) {
            let literals = (0..rng.gen_range(1..4))
                .map(|_| {
                    let symbol = SYMBOLS[rng.gen_range(0..SYMBOLS.len())];
                    (symbol, rng.gen_bool(0.5))
                })
                .collect::<Vec<_>>();

            let dpll_clause = literals
                .iter()
                .map(|(symbol, polarity)| match polarity {
                    true => symbol.to_string(),
                    false => format!("-{symbol}"),
                })
                .collect::<Vec<_>>()
                .join(" | ");

            let tt_clause = literals
                .iter()
                .map(|(symbol, polarity)| match polarity {
                    true => symbol.to_string(),
                    false => format!("~{symbol}"),
                })
                .collect::<Vec<_>>()
                .join(" || ");

            dpll_kb.push(dpll_clause);
            tt_kb.push(tt_clause);
        }

        (dpll_kb, tt_kb)
    }

    #[test]
    fn counts_and_verdicts_agree_with_truth_table() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = Config::default();

        for _ in 0..200 {
            let (dpll_kb, tt_kb) = random_cnf(&mut rng);

            for query in SYMBOLS {
                let dpll = entails(&dpll_kb, query, Method::DPLL, &config).unwrap();
                let truth_table = entails(&tt_kb, query, Method::TT, &config).unwrap();

                assert_eq!(dpll.verdict, truth_table.verdict, "{dpll_kb:?} {query}");
                assert_eq!(dpll.models(), truth_table.models(), "{dpll_kb:?} {query}");
            }
        }
    }

    #[test]
    fn pure_literals_keep_verdicts_and_counts() {
        let mut rng = StdRng::seed_from_u64(29);
        let pure = Config::default();
        let exhaustive = without_pure_literals();

        for _ in 0..200 {
            let (kb, _) = random_cnf(&mut rng);

            for query in SYMBOLS {
                let with = entails(&kb, query, Method::DPLL, &pure).unwrap();
                let without = entails(&kb, query, Method::DPLL, &exhaustive).unwrap();

                assert_eq!(with.verdict, without.verdict, "{kb:?} {query}");
                assert_eq!(with.models(), without.models(), "{kb:?} {query}");
            }
        }
    }
}

mod limits {
    use super::*;

    /// A unit clause `s0` and a chain of clauses `-s0 | s1`, ..., ending at `s{length}`.
    fn chain(length: usize) -> Vec<String> {
        std::iter::once("s0".to_string())
            .chain((0..length).map(|i| format!("-s{i} | s{}", i + 1)))
            .collect()
    }

    #[test]
    fn long_chains_within_the_default_limit() {
        let kb = chain(400);

        for config in [Config::default(), without_pure_literals()] {
            let report = entails(&kb, "s400", Method::DPLL, &config).unwrap();
            assert_eq!(report.to_string(), "YES: 1");
        }
    }

    #[test]
    fn long_chains_beyond_the_default_limit() {
        let kb = chain(1500);
        let limit = err::ErrorKind::Resource(err::ResourceError::RecursionLimit(
            defaults::RECURSION_LIMIT,
        ));

        assert_eq!(
            entails(&kb, "s1500", Method::DPLL, &Config::default()),
            Err(limit.clone())
        );
        assert_eq!(solve(&kb, &Config::default()).map(|search| search.models), Err(limit));
    }
}
