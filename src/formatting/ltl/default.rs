use {
    crate::syntax_tree::ltl::{Formula, Kind},
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N>(pub &'a N);

impl<A: Display> Display for Format<'_, Formula<A>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.kind() {
            Kind::Atomic(atom) => write!(f, "{atom}"),
            Kind::Not(sub) => write!(f, "not {}", Operand(sub)),
            Kind::Global(sub) => write!(f, "G {}", Operand(sub)),
            Kind::Future(sub) => write!(f, "F {}", Operand(sub)),
            Kind::And(lhs, rhs) => write!(f, "{} and {}", Operand(lhs), Operand(rhs)),
            Kind::Or(lhs, rhs) => write!(f, "{} or {}", Operand(lhs), Operand(rhs)),
            Kind::Until(lhs, rhs) => write!(f, "{} U {}", Operand(lhs), Operand(rhs)),
            Kind::Release(lhs, rhs) => write!(f, "{} R {}", Operand(lhs), Operand(rhs)),
        }
    }
}

/// Parenthesizes every operand that is not an atom.
struct Operand<'a, A>(&'a Formula<A>);

impl<A: Display> Display for Operand<'_, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.kind() {
            Kind::Atomic(_) => Format(self.0).fmt(f),
            _ => write!(f, "({})", Format(self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax_tree::{fixtures::Letter, ltl::Formula};

    impl std::fmt::Display for Letter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Letter::Top => write!(f, "#true"),
                Letter::Bottom => write!(f, "#false"),
                Letter::P => write!(f, "p"),
                Letter::Q => write!(f, "q"),
                Letter::R => write!(f, "r"),
            }
        }
    }

    #[test]
    fn format_formula() {
        let p = || Formula::atomic(Letter::P);
        let q = || Formula::atomic(Letter::Q);

        assert_eq!(p().to_string(), "p");
        assert_eq!(Formula::not(p()).to_string(), "not p");
        assert_eq!(
            Formula::global(Formula::future(p())).to_string(),
            "G (F p)"
        );
        assert_eq!(Formula::until(p(), q()).to_string(), "p U q");
        assert_eq!(
            Formula::or(Formula::and(p(), q()), Formula::release(q(), p())).to_string(),
            "(p and q) or (q R p)"
        );
        assert_eq!(
            Formula::not(Formula::until(p(), q())).to_string(),
            "not (p U q)"
        );
    }
}
