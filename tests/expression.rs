use iengine::{
    config::{defaults, Config},
    procedures::{entails, Method},
    structures::{
        expression::{Connective, Expression},
        symbol::Symbol,
        valuation::Model,
    },
    types::err::{self},
};

fn model(values: &[(&str, bool)]) -> Model {
    values
        .iter()
        .map(|(name, value)| (Symbol::from_name(name), *value))
        .collect()
}

mod splitting {
    use super::*;

    #[test]
    fn leftmost_connective_is_main() {
        let expression = Expression::parse("a & b => c").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Conjunction));
        assert_eq!(expression.to_string(), "(a & (b => c))");

        let expression = Expression::parse("a => b & c").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Implication));
        assert_eq!(expression.to_string(), "(a => (b & c))");
    }

    #[test]
    fn parentheses_override_position() {
        let expression = Expression::parse("(a & b) => c").unwrap();
        assert_eq!(expression.to_string(), "((a & b) => c)");
    }

    #[test]
    fn biconditional_is_not_read_as_implication() {
        let expression = Expression::parse("a <=> b").unwrap();
        assert_eq!(expression.connective(), Some(Connective::Biconditional));
    }

    #[test]
    fn negated_group() {
        let expression = Expression::parse("~(a || b)").unwrap();
        assert_eq!(expression.to_string(), "~(a || b)");
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Expression::parse("(a & b"),
            Err(err::ErrorKind::Parse(err::ParseError::Unbalanced(
                "(a&b".to_string()
            )))
        );
        assert_eq!(
            Expression::parse("a &"),
            Err(err::ErrorKind::Parse(err::ParseError::MissingOperand(
                "a&".to_string(),
                Connective::Conjunction
            )))
        );
        assert_eq!(
            Expression::parse("  "),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
        assert!(matches!(
            Expression::parse("1a"),
            Err(err::ErrorKind::Parse(err::ParseError::InvalidSymbol(_)))
        ));
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn connective_truth_tables() {
        let cases = [
            ("a & b", [true, false, false, false]),
            ("a || b", [true, true, true, false]),
            ("a => b", [true, false, true, true]),
            ("a <=> b", [true, false, false, true]),
        ];

        for (text, expected) in cases {
            let expression = Expression::parse(text).unwrap();
            let values = [(true, true), (true, false), (false, true), (false, false)]
                .map(|(a, b)| expression.evaluate(&model(&[("a", a), ("b", b)])));
            assert_eq!(values, expected, "{text}");
        }
    }

    #[test]
    fn leftmost_reading_is_evaluated() {
        // Read as a & (b => c), which is false whenever a is false.
        let expression = Expression::parse("a & b => c").unwrap();
        assert!(!expression.evaluate(&model(&[("a", false), ("b", false), ("c", false)])));
        assert!(expression.evaluate(&model(&[("a", true), ("b", false), ("c", false)])));
    }

    #[test]
    fn unassigned_symbols_are_false() {
        let expression = Expression::parse("~z").unwrap();
        assert!(expression.evaluate(&Model::default()));
    }
}

mod nesting {
    use super::*;

    fn conjunction_of(count: usize) -> String {
        vec!["a"; count].join(" & ")
    }

    #[test]
    fn long_conjunctions_within_the_default_limit() {
        let expression = Expression::parse(&conjunction_of(400)).unwrap();
        assert_eq!(expression.connective(), Some(Connective::Conjunction));
        assert!(expression.evaluate(&model(&[("a", true)])));
    }

    #[test]
    fn long_conjunctions_beyond_the_default_limit() {
        let limit = err::ErrorKind::Resource(err::ResourceError::RecursionLimit(
            defaults::RECURSION_LIMIT,
        ));

        assert_eq!(Expression::parse(&conjunction_of(20_000)), Err(limit.clone()));

        let query = conjunction_of(20_000);
        assert_eq!(entails(&["a"], &query, Method::TT, &Config::default()), Err(limit));
    }

    #[test]
    fn deep_parentheses() {
        let text = format!("{}a{}", "(".repeat(20_000), ")".repeat(20_000));
        assert!(matches!(
            Expression::parse(&text),
            Err(err::ErrorKind::Resource(err::ResourceError::RecursionLimit(_)))
        ));
    }
}
