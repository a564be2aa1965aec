use {
    super::{push_unique, Buchi},
    indexmap::{IndexMap, IndexSet},
    std::hash::Hash,
};

/// A Büchi automaton given by explicit transition tables, mostly useful for
/// small hand-written automata.
pub struct Explicit<Q, L> {
    initial: Vec<Q>,
    transitions: IndexMap<Q, Vec<(L, Q)>>,
    accepting: IndexSet<Q>,
}

impl<Q: Clone + Eq + Hash, L: Clone + PartialEq> Explicit<Q, L> {
    pub fn new(initial: impl IntoIterator<Item = Q>) -> Self {
        Explicit {
            initial: initial.into_iter().collect(),
            transitions: IndexMap::new(),
            accepting: IndexSet::new(),
        }
    }

    pub fn insert_transition(&mut self, source: Q, label: L, target: Q) {
        push_unique(
            self.transitions.entry(source).or_default(),
            (label, target),
        );
    }

    pub fn insert_accepting(&mut self, state: Q) {
        self.accepting.insert(state);
    }
}

impl<Q: Clone + Eq + Hash, L: Clone + PartialEq> Buchi for Explicit<Q, L> {
    type State = Q;
    type Label = L;

    fn initial_states(&self) -> Vec<Q> {
        self.initial.clone()
    }

    fn transitions(&self, state: &Q) -> Vec<(L, Q)> {
        self.transitions.get(state).cloned().unwrap_or_default()
    }

    fn accepting(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }
}
