use {
    crate::syntax_tree::Atom,
    std::{
        fmt::{self, Debug, Display, Formatter},
        hash::{Hash, Hasher},
        rc::Rc,
        sync::atomic::{AtomicU64, Ordering},
    },
};

static PROPOSITION_COUNT: AtomicU64 = AtomicU64::new(0);

/// An atomic proposition over states of type `S` with a stable identity.
///
/// Every construction mints a fresh id and equality compares ids only, so two
/// propositions with identical predicates built independently are distinct.
/// This is what makes set membership over propositions well-defined without
/// inspecting the closures.
pub struct Proposition<S> {
    id: u64,
    name: Rc<str>,
    predicate: Rc<dyn Fn(&S) -> bool>,
}

impl<S> Proposition<S> {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&S) -> bool + 'static) -> Self {
        Proposition {
            id: PROPOSITION_COUNT.fetch_add(1, Ordering::Relaxed),
            name: name.into().into(),
            predicate: Rc::new(predicate),
        }
    }

    pub fn holds(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> Clone for Proposition<S> {
    fn clone(&self) -> Self {
        Proposition {
            id: self.id,
            name: Rc::clone(&self.name),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S> PartialEq for Proposition<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Proposition<S> {}

impl<S> Hash for Proposition<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S> Debug for Proposition<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proposition")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl<S> Display for Proposition<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<S: 'static> Atom for Proposition<S> {
    fn top() -> Self {
        Proposition::new("#true", |_| true)
    }

    fn bottom() -> Self {
        Proposition::new("#false", |_| false)
    }

    fn complement(&self) -> Option<Self> {
        let inner = self.clone();
        Some(Proposition::new(format!("not ({})", self.name), move |state| {
            !inner.holds(state)
        }))
    }

    fn disjoin(&self, other: &Self) -> Option<Self> {
        let (lhs, rhs) = (self.clone(), other.clone());
        Some(Proposition::new(
            format!("({} or {})", self.name, other.name),
            move |state| lhs.holds(state) || rhs.holds(state),
        ))
    }

    fn conjoin(&self, other: &Self) -> Option<Self> {
        let (lhs, rhs) = (self.clone(), other.clone());
        Some(Proposition::new(
            format!("({} and {})", self.name, other.name),
            move |state| lhs.holds(state) && rhs.holds(state),
        ))
    }
}
