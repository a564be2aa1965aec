use crate::syntax_tree::{
    ltl::{Formula, Kind},
    Atom,
};

pub trait Apply {
    /// Apply an operation `f` in post-order to each node of a tree
    fn apply(self, f: &mut impl FnMut(Self) -> Self) -> Self
    where
        Self: Sized;
}

impl<A: Atom> Apply for Formula<A> {
    fn apply(self, f: &mut impl FnMut(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        let inner = match self.into_kind() {
            kind @ Kind::Atomic(_) => Formula::raw(kind),

            Kind::Not(formula) => Formula::raw(Kind::Not((*formula).apply(f).into())),
            Kind::Global(formula) => Formula::raw(Kind::Global((*formula).apply(f).into())),
            Kind::Future(formula) => Formula::raw(Kind::Future((*formula).apply(f).into())),

            Kind::Or(lhs, rhs) => {
                Formula::raw(Kind::Or((*lhs).apply(f).into(), (*rhs).apply(f).into()))
            }
            Kind::And(lhs, rhs) => {
                Formula::raw(Kind::And((*lhs).apply(f).into(), (*rhs).apply(f).into()))
            }
            Kind::Until(lhs, rhs) => {
                Formula::raw(Kind::Until((*lhs).apply(f).into(), (*rhs).apply(f).into()))
            }
            Kind::Release(lhs, rhs) => {
                Formula::raw(Kind::Release((*lhs).apply(f).into(), (*rhs).apply(f).into()))
            }
        };
        f(inner)
    }
}
