use {
    super::{push_unique, Buchi},
    itertools::iproduct,
};

/// The synchronous product of two Büchi automata.
///
/// A transition exists wherever both operands can step with labels the
/// `matches` predicate accepts. The third state component is a phase counter
/// cycling 0 → 1 → 2 → 0: it advances past 0 on an accepting left target and
/// past 1 on an accepting right target, so phase 2 recurs infinitely often
/// exactly when both operands accept infinitely often.
pub struct Intersection<L, R, M> {
    left: L,
    right: R,
    matches: M,
}

impl<L, R, M> Intersection<L, R, M>
where
    L: Buchi,
    R: Buchi,
    M: Fn(&L::Label, &R::Label) -> bool,
{
    pub fn new(left: L, right: R, matches: M) -> Self {
        Intersection {
            left,
            right,
            matches,
        }
    }
}

impl<L, R, M> Buchi for Intersection<L, R, M>
where
    L: Buchi,
    R: Buchi,
    M: Fn(&L::Label, &R::Label) -> bool,
{
    type State = (L::State, R::State, u8);
    type Label = L::Label;

    fn initial_states(&self) -> Vec<Self::State> {
        iproduct!(self.left.initial_states(), self.right.initial_states())
            .map(|(left, right)| (left, right, 0))
            .collect()
    }

    fn transitions(&self, state: &Self::State) -> Vec<(Self::Label, Self::State)> {
        let (left, right, phase) = state;

        let mut transitions = Vec::new();
        for ((label, left_target), (right_label, right_target)) in
            iproduct!(self.left.transitions(left), self.right.transitions(right))
        {
            if !(self.matches)(&label, &right_label) {
                continue;
            }
            let next_phase = match phase {
                0 if self.left.accepting(&left_target) => 1,
                1 if self.right.accepting(&right_target) => 2,
                2 => 0,
                _ => *phase,
            };
            push_unique(
                &mut transitions,
                (label, (left_target, right_target, next_phase)),
            );
        }
        transitions
    }

    fn accepting(&self, state: &Self::State) -> bool {
        state.2 == 2
    }
}
