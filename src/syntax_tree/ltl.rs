use {
    crate::{formatting::ltl::default::Format, syntax_tree::Atom},
    indexmap::IndexSet,
    std::{
        fmt::{self, Display, Formatter},
        hash::{Hash, Hasher},
        mem::discriminant,
    },
};

/// The connective at the root of a formula, together with its children.
#[derive(Clone, Debug)]
pub enum Kind<A> {
    Atomic(A),
    Not(Box<Formula<A>>),
    Or(Box<Formula<A>>, Box<Formula<A>>),
    And(Box<Formula<A>>, Box<Formula<A>>),
    Global(Box<Formula<A>>),
    Future(Box<Formula<A>>),
    Until(Box<Formula<A>>, Box<Formula<A>>),
    Release(Box<Formula<A>>, Box<Formula<A>>),
}

/// An immutable LTL formula caching the set of atoms of its subtree.
///
/// Formulas are built through the constructor functions, which may fold
/// literal subtrees into single atoms when the `Atom` hooks permit it.
#[derive(Clone, Debug)]
pub struct Formula<A> {
    kind: Kind<A>,
    atoms: IndexSet<A>,
}

impl<A: Atom> Formula<A> {
    pub(crate) fn raw(kind: Kind<A>) -> Self {
        let mut atoms = IndexSet::new();
        match &kind {
            Kind::Atomic(atom) => {
                atoms.insert(atom.clone());
            }
            Kind::Not(formula) | Kind::Global(formula) | Kind::Future(formula) => {
                atoms.extend(formula.atoms.iter().cloned());
            }
            Kind::Or(lhs, rhs)
            | Kind::And(lhs, rhs)
            | Kind::Until(lhs, rhs)
            | Kind::Release(lhs, rhs) => {
                atoms.extend(lhs.atoms.iter().cloned());
                atoms.extend(rhs.atoms.iter().cloned());
            }
        }
        Formula { kind, atoms }
    }

    pub fn atomic(atom: A) -> Self {
        Self::raw(Kind::Atomic(atom))
    }

    pub fn not(formula: Self) -> Self {
        if let Kind::Atomic(atom) = &formula.kind {
            if let Some(complement) = atom.complement() {
                return Self::atomic(complement);
            }
        }
        Self::raw(Kind::Not(formula.into()))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        if let (Kind::Atomic(a), Kind::Atomic(b)) = (&lhs.kind, &rhs.kind) {
            if let Some(joined) = a.disjoin(b) {
                return Self::atomic(joined);
            }
        }
        Self::raw(Kind::Or(lhs.into(), rhs.into()))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        if let (Kind::Atomic(a), Kind::Atomic(b)) = (&lhs.kind, &rhs.kind) {
            if let Some(joined) = a.conjoin(b) {
                return Self::atomic(joined);
            }
        }
        Self::raw(Kind::And(lhs.into(), rhs.into()))
    }

    pub fn global(formula: Self) -> Self {
        Self::raw(Kind::Global(formula.into()))
    }

    pub fn future(formula: Self) -> Self {
        Self::raw(Kind::Future(formula.into()))
    }

    pub fn until(lhs: Self, rhs: Self) -> Self {
        Self::raw(Kind::Until(lhs.into(), rhs.into()))
    }

    pub fn release(lhs: Self, rhs: Self) -> Self {
        Self::raw(Kind::Release(lhs.into(), rhs.into()))
    }
}

impl<A> Formula<A> {
    pub fn kind(&self) -> &Kind<A> {
        &self.kind
    }

    pub fn into_kind(self) -> Kind<A> {
        self.kind
    }

    /// The atoms appearing in the subtree.
    pub fn atoms(&self) -> &IndexSet<A> {
        &self.atoms
    }

    /// The atom of an atomic formula. Calling this on anything else is a
    /// caller error.
    pub fn atom(&self) -> &A {
        match &self.kind {
            Kind::Atomic(atom) => atom,
            _ => panic!("attempt to access the atom of a non-atomic formula"),
        }
    }

    /// True for atoms and negated atoms.
    pub fn is_literal(&self) -> bool {
        match &self.kind {
            Kind::Atomic(_) => true,
            Kind::Not(formula) => matches!(formula.kind, Kind::Atomic(_)),
            _ => false,
        }
    }
}

impl<A: Eq + Hash> PartialEq for Formula<A> {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
            && match (&self.kind, &other.kind) {
                (Kind::Atomic(a), Kind::Atomic(b)) => a == b,
                (Kind::Not(f), Kind::Not(g))
                | (Kind::Global(f), Kind::Global(g))
                | (Kind::Future(f), Kind::Future(g)) => f == g,
                (Kind::Or(f1, f2), Kind::Or(g1, g2))
                | (Kind::And(f1, f2), Kind::And(g1, g2))
                | (Kind::Until(f1, f2), Kind::Until(g1, g2))
                | (Kind::Release(f1, f2), Kind::Release(g1, g2)) => f1 == g1 && f2 == g2,
                _ => false,
            }
    }
}

impl<A: Eq + Hash> Eq for Formula<A> {}

impl<A: Eq + Hash> Hash for Formula<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(&self.kind).hash(state);
        match &self.kind {
            Kind::Atomic(atom) => atom.hash(state),
            Kind::Not(f) | Kind::Global(f) | Kind::Future(f) => f.hash(state),
            Kind::Or(f, g) | Kind::And(f, g) | Kind::Until(f, g) | Kind::Release(f, g) => {
                f.hash(state);
                g.hash(state);
            }
        }
    }
}

impl<A: Display> Display for Formula<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Format(self).fmt(f)
    }
}
