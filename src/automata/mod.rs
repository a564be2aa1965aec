pub mod explicit;
pub mod intersection;
pub mod kripke;
pub mod proposition;

use std::hash::Hash;

/// A nondeterministic Büchi automaton explored on the fly.
///
/// Labels are opaque to the engine; only the equality and containment checks
/// performed by a caller-provided matcher ever inspect them. A run is
/// accepting iff it visits accepting states infinitely often.
pub trait Buchi {
    type State: Clone + Eq + Hash;
    type Label: Clone + PartialEq;

    fn initial_states(&self) -> Vec<Self::State>;

    /// The outgoing transitions of `state`. Identical `(label, target)` pairs
    /// are reported once (set semantics).
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Label, Self::State)>;

    fn accepting(&self, state: &Self::State) -> bool;
}

/// A finite stem followed by a finite cycle, representing the infinite run
/// `stem · cycle · cycle · …`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lasso<S> {
    pub stem: Vec<S>,
    pub cycle: Vec<S>,
}

pub(crate) fn push_unique<L: PartialEq, S: PartialEq>(
    transitions: &mut Vec<(L, S)>,
    transition: (L, S),
) {
    if !transitions.contains(&transition) {
        transitions.push(transition);
    }
}
