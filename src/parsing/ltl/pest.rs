use {
    crate::{automata::proposition::Proposition, parsing::PestParser, syntax_tree::ltl::Formula},
    pest::iterators::Pair,
};

mod internal {
    use pest::pratt_parser::PrattParser;

    #[derive(pest_derive::Parser)]
    #[grammar = "parsing/ltl/grammar.pest"]
    pub struct Parser;

    lazy_static::lazy_static! {
        pub static ref FORMULA_PRATT_PARSER: PrattParser<Rule> = {
            use pest::pratt_parser::{Assoc::*, Op};
            use Rule::*;

            PrattParser::new()
                .op(Op::infix(disjunction, Left))
                .op(Op::infix(conjunction, Left))
                .op(Op::infix(until, Right) | Op::infix(release, Right))
                .op(Op::prefix(negation) | Op::prefix(global) | Op::prefix(future))
        };
    }
}

pub use internal::Rule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operand {
    Numeral(i64),
    StateVariable,
}

impl Operand {
    fn value(self, state: &i64) -> i64 {
        match self {
            Operand::Numeral(n) => n,
            Operand::StateVariable => *state,
        }
    }

    fn text(self) -> String {
        match self {
            Operand::Numeral(n) => n.to_string(),
            Operand::StateVariable => String::from("x"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    fn compare(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Relation::Equal => lhs == rhs,
            Relation::NotEqual => lhs != rhs,
            Relation::Less => lhs < rhs,
            Relation::LessEqual => lhs <= rhs,
            Relation::Greater => lhs > rhs,
            Relation::GreaterEqual => lhs >= rhs,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "=",
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::LessEqual => "<=",
            Relation::Greater => ">",
            Relation::GreaterEqual => ">=",
        }
    }
}

/// Parses a comparison between the state variable and numerals into a
/// proposition over integer states, named after its source text.
pub struct ComparisonParser;

impl ComparisonParser {
    fn translate_operand(pair: Pair<'_, Rule>) -> Operand {
        match pair.as_rule() {
            Rule::numeral => Operand::Numeral(pair.as_str().parse().unwrap()),
            Rule::state_variable => Operand::StateVariable,
            _ => Self::report_unexpected_pair(pair),
        }
    }

    fn translate_relation(pair: Pair<'_, Rule>) -> Relation {
        match pair.as_rule() {
            Rule::equal => Relation::Equal,
            Rule::not_equal => Relation::NotEqual,
            Rule::less => Relation::Less,
            Rule::less_equal => Relation::LessEqual,
            Rule::greater => Relation::Greater,
            Rule::greater_equal => Relation::GreaterEqual,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

impl PestParser for ComparisonParser {
    type Node = Proposition<i64>;

    type InternalParser = internal::Parser;
    type Rule = Rule;
    const RULE: Rule = Rule::comparison;

    fn translate_pair(pair: Pair<'_, Rule>) -> Self::Node {
        let mut pairs = pair.into_inner();
        let lhs = Self::translate_operand(pairs.next().unwrap_or_else(|| Self::report_missing_pair()));
        let relation =
            Self::translate_relation(pairs.next().unwrap_or_else(|| Self::report_missing_pair()));
        let rhs = Self::translate_operand(pairs.next().unwrap_or_else(|| Self::report_missing_pair()));
        if let Some(pair) = pairs.next() {
            Self::report_unexpected_pair(pair)
        }

        let name = format!("{} {} {}", lhs.text(), relation.symbol(), rhs.text());
        Proposition::new(name, move |state| {
            relation.compare(lhs.value(state), rhs.value(state))
        })
    }
}

pub struct FormulaParser;

impl PestParser for FormulaParser {
    type Node = Formula<Proposition<i64>>;

    type InternalParser = internal::Parser;
    type Rule = Rule;
    const RULE: Rule = Rule::formula;

    fn translate_pair(pair: Pair<'_, Rule>) -> Self::Node {
        internal::FORMULA_PRATT_PARSER
            .map_primary(|primary| match primary.as_rule() {
                Rule::formula => FormulaParser::translate_pair(primary),
                Rule::comparison => Formula::atomic(ComparisonParser::translate_pair(primary)),
                Rule::truth => Formula::atomic(Proposition::new("#true", |_: &i64| true)),
                Rule::falsity => Formula::atomic(Proposition::new("#false", |_: &i64| false)),
                _ => Self::report_unexpected_pair(primary),
            })
            .map_prefix(|op, formula| match op.as_rule() {
                Rule::negation => Formula::not(formula),
                Rule::global => Formula::global(formula),
                Rule::future => Formula::future(formula),
                _ => Self::report_unexpected_pair(op),
            })
            .map_infix(|lhs, op, rhs| match op.as_rule() {
                Rule::conjunction => Formula::and(lhs, rhs),
                Rule::disjunction => Formula::or(lhs, rhs),
                Rule::until => Formula::until(lhs, rhs),
                Rule::release => Formula::release(lhs, rhs),
                _ => Self::report_unexpected_pair(op),
            })
            .parse(pair.into_inner())
    }
}
