use {
    crate::automata::proposition::Proposition,
    indexmap::IndexSet,
    std::{hash::Hash, rc::Rc},
};

/// A finite transition system with a labeling function and a list of fairness
/// constraints (generalized Büchi fairness over states).
///
/// The successor and labeling functions are ordinary closures; states carry
/// the identity, the functions do not.
pub struct Kripke<S, A> {
    initial: IndexSet<S>,
    transitions: Rc<dyn Fn(&S) -> IndexSet<S>>,
    fairness: Vec<Rc<dyn Fn(&S) -> bool>>,
    labeling: Rc<dyn Fn(&S, &A) -> bool>,
}

impl<S: Eq + Hash + 'static> Kripke<S, Proposition<S>> {
    /// A structure whose labeling evaluates each proposition at the state.
    pub fn new(
        initial: impl IntoIterator<Item = S>,
        transitions: impl Fn(&S) -> IndexSet<S> + 'static,
    ) -> Self {
        Self::labeled(initial, transitions, |state, proposition: &Proposition<S>| {
            proposition.holds(state)
        })
    }
}

impl<S: Eq + Hash, A> Kripke<S, A> {
    pub fn labeled(
        initial: impl IntoIterator<Item = S>,
        transitions: impl Fn(&S) -> IndexSet<S> + 'static,
        labeling: impl Fn(&S, &A) -> bool + 'static,
    ) -> Self {
        Kripke {
            initial: initial.into_iter().collect(),
            transitions: Rc::new(transitions),
            fairness: Vec::new(),
            labeling: Rc::new(labeling),
        }
    }

    /// Append a fairness constraint. A fair run must satisfy every registered
    /// constraint infinitely often.
    pub fn with_fairness(mut self, constraint: impl Fn(&S) -> bool + 'static) -> Self {
        self.fairness.push(Rc::new(constraint));
        self
    }

    pub fn initial_states(&self) -> &IndexSet<S> {
        &self.initial
    }

    /// May be empty for deadlocked states.
    pub fn successors(&self, state: &S) -> IndexSet<S> {
        (self.transitions)(state)
    }

    pub fn holds(&self, state: &S, atom: &A) -> bool {
        (self.labeling)(state, atom)
    }

    /// The subset of `alphabet` holding at `state`.
    pub fn labels(&self, state: &S, alphabet: &IndexSet<A>) -> IndexSet<A>
    where
        A: Clone + Eq + Hash,
    {
        alphabet
            .iter()
            .filter(|atom| self.holds(state, atom))
            .cloned()
            .collect()
    }

    /// The number of fairness constraints. An empty list behaves as a single
    /// always-true constraint.
    pub fn constraint_count(&self) -> usize {
        self.fairness.len().max(1)
    }

    pub fn satisfies_constraint(&self, index: usize, state: &S) -> bool {
        self.fairness
            .get(index)
            .map_or(true, |constraint| constraint(state))
    }
}

impl<S: Clone, A> Clone for Kripke<S, A> {
    fn clone(&self) -> Self {
        Kripke {
            initial: self.initial.clone(),
            transitions: Rc::clone(&self.transitions),
            fairness: self.fairness.clone(),
            labeling: Rc::clone(&self.labeling),
        }
    }
}
