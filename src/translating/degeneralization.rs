use {
    crate::automata::{kripke::Kripke, push_unique, Buchi},
    indexmap::IndexSet,
    std::hash::Hash,
};

/// The counter product collapsing the k fairness constraints of a Kripke
/// structure into a single Büchi acceptance set.
///
/// States are `(state, counter)` with a synthetic start `(None, 0)`. The
/// counter advances past index j when the target state satisfies the j-th
/// constraint and resets after reaching k, so a run passes counter value k
/// infinitely often iff it satisfies every constraint infinitely often.
pub struct Degeneralization<S, A> {
    kripke: Kripke<S, A>,
    alphabet: IndexSet<A>,
}

pub fn degeneralize<S, A>(kripke: Kripke<S, A>, alphabet: IndexSet<A>) -> Degeneralization<S, A> {
    Degeneralization { kripke, alphabet }
}

impl<S, A> Buchi for Degeneralization<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    type State = (Option<S>, usize);
    type Label = IndexSet<A>;

    fn initial_states(&self) -> Vec<Self::State> {
        vec![(None, 0)]
    }

    fn transitions(&self, state: &Self::State) -> Vec<(Self::Label, Self::State)> {
        let (source, counter) = state;

        let targets = match source {
            None => self.kripke.initial_states().clone(),
            Some(source) => self.kripke.successors(source),
        };

        let count = self.kripke.constraint_count();
        let mut transitions = Vec::new();
        for target in targets {
            let next_counter = if *counter == count {
                0
            } else if self.kripke.satisfies_constraint(*counter, &target) {
                counter + 1
            } else {
                *counter
            };
            let label = self.kripke.labels(&target, &self.alphabet);
            push_unique(&mut transitions, (label, (Some(target), next_counter)));
        }
        transitions
    }

    fn accepting(&self, state: &Self::State) -> bool {
        state.1 == self.kripke.constraint_count()
    }
}
