pub mod pest;

use {
    crate::{
        automata::proposition::Proposition,
        parsing::{ltl::pest::FormulaParser, PestParser as _},
        syntax_tree::ltl::Formula,
    },
    std::str::FromStr,
    thiserror::Error,
};

/// Failure to read an LTL specification over integer states.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] Box<::pest::error::Error<pest::Rule>>),
}

impl FromStr for Formula<Proposition<i64>> {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        FormulaParser::parse(input.trim()).map_err(|error| ParseError::from(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        automata::proposition::Proposition,
        syntax_tree::ltl::{Formula, Kind},
    };

    fn parse(input: &str) -> Formula<Proposition<i64>> {
        input.parse().unwrap()
    }

    #[test]
    fn comparisons_become_propositions() {
        let formula = parse("x = 0");
        let atom = formula.atom();
        assert_eq!(atom.name(), "x = 0");
        assert!(atom.holds(&0));
        assert!(!atom.holds(&1));

        let atom = parse("3 <= x").into_kind();
        let Kind::Atomic(atom) = atom else {
            panic!("expected an atom");
        };
        assert!(!atom.holds(&2));
        assert!(atom.holds(&3));
        assert!(atom.holds(&4));
    }

    #[test]
    fn temporal_structure_survives_parsing() {
        let formula = parse("G (F x = 0)");
        let Kind::Global(inner) = formula.kind() else {
            panic!("expected G at the root");
        };
        assert!(matches!(inner.kind(), Kind::Future(_)));
    }

    #[test]
    fn prefixes_chain_without_parentheses() {
        assert_eq!(parse("G F x = 0").to_string(), "G (F x = 0)");
    }

    #[test]
    fn until_binds_tighter_than_disjunction() {
        let formula = parse("x = 0 U x = 1 or 2 < x");
        assert_eq!(formula.to_string(), "(x = 0 U x = 1) or 2 < x");
    }

    #[test]
    fn disjoined_comparisons_fold_into_one_proposition() {
        let formula = parse("x = 0 or x = 1");
        let atom = formula.atom();
        assert!(atom.holds(&0));
        assert!(atom.holds(&1));
        assert!(!atom.holds(&2));
    }

    #[test]
    fn truth_constants_parse() {
        assert!(parse("#true").atom().holds(&17));
        assert!(!parse("#false").atom().holds(&17));
    }

    #[test]
    fn formatting_round_trips_through_the_parser() {
        for input in ["not x = 0", "G (x = 0 R (F x != 1))", "x >= -3 U #true"] {
            let formula = parse(input);
            assert_eq!(parse(&formula.to_string()).to_string(), formula.to_string());
        }
    }

    #[test]
    fn malformed_specifications_are_rejected() {
        for input in ["", "x =", "U x = 0", "x == 0", "(x = 0", "y = 0", "x = 0 extra"] {
            assert!(
                input.parse::<Formula<Proposition<i64>>>().is_err(),
                "expected a parse error for `{input}`"
            );
        }
    }
}
