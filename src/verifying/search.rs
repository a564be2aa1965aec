use {
    crate::automata::{Buchi, Lasso},
    indexmap::IndexSet,
};

/// Searches a Büchi automaton for an accepting run with the nested
/// depth-first search. Returns `None` exactly when the language is empty.
///
/// The outer search visits every reachable state once; whenever it retreats
/// from an accepting state, the inner search looks for a cycle back onto the
/// outer stack. Inner visits are flagged permanently, which keeps the whole
/// search linear in the size of the product.
pub fn find_accepting_run<B: Buchi>(automaton: &B) -> Option<Lasso<B::State>> {
    let mut hashed = IndexSet::new();
    let mut flagged = IndexSet::new();

    for initial in automaton.initial_states() {
        if hashed.contains(&initial) {
            continue;
        }
        let mut stack = vec![initial.clone()];
        let result = dfs1(automaton, &initial, &mut stack, &mut hashed, &mut flagged);
        if result.is_some() {
            return result;
        }
    }

    log::debug!("no accepting run among {} reachable states", hashed.len());
    None
}

fn dfs1<B: Buchi>(
    automaton: &B,
    state: &B::State,
    stack: &mut Vec<B::State>,
    hashed: &mut IndexSet<B::State>,
    flagged: &mut IndexSet<B::State>,
) -> Option<Lasso<B::State>> {
    hashed.insert(state.clone());

    for (_, successor) in automaton.transitions(state) {
        if !hashed.contains(&successor) {
            stack.push(successor.clone());
            let result = dfs1(automaton, &successor, stack, hashed, flagged);
            if result.is_some() {
                return result;
            }
            stack.pop();
        }
    }

    if automaton.accepting(state) {
        let mut inner = vec![state.clone()];
        return dfs2(automaton, state, stack, &mut inner, flagged);
    }
    None
}

fn dfs2<B: Buchi>(
    automaton: &B,
    state: &B::State,
    outer: &[B::State],
    inner: &mut Vec<B::State>,
    flagged: &mut IndexSet<B::State>,
) -> Option<Lasso<B::State>> {
    flagged.insert(state.clone());

    for (_, successor) in automaton.transitions(state) {
        if let Some(position) = outer.iter().position(|other| *other == successor) {
            // the cycle closes onto the outer stack: everything from there on,
            // plus the inner path (whose head duplicates the outer tail)
            let mut cycle = outer[position..].to_vec();
            cycle.extend_from_slice(&inner[1..]);
            return Some(Lasso {
                stem: outer[..position].to_vec(),
                cycle,
            });
        }
        if !flagged.contains(&successor) {
            inner.push(successor.clone());
            let result = dfs2(automaton, &successor, outer, inner, flagged);
            if result.is_some() {
                return result;
            }
            inner.pop();
        }
    }
    None
}

#[cfg(test)]
pub(crate) mod tests {
    use {
        super::find_accepting_run,
        crate::automata::{explicit::Explicit, Buchi, Lasso},
    };

    /// Checks that the lasso actually is an accepting run of `automaton`.
    pub(crate) fn assert_accepting_lasso<B: Buchi>(automaton: &B, lasso: &Lasso<B::State>) {
        assert!(!lasso.cycle.is_empty(), "the cycle must be non-empty");

        let first = lasso.stem.first().unwrap_or(&lasso.cycle[0]);
        assert!(
            automaton.initial_states().contains(first),
            "the run must start in an initial state"
        );

        let has_edge = |source: &B::State, target: &B::State| {
            automaton
                .transitions(source)
                .iter()
                .any(|(_, successor)| successor == target)
        };

        let run: Vec<&B::State> = lasso.stem.iter().chain(&lasso.cycle).collect();
        for pair in run.windows(2) {
            assert!(has_edge(pair[0], pair[1]), "the run must follow transitions");
        }
        assert!(
            has_edge(&lasso.cycle[lasso.cycle.len() - 1], &lasso.cycle[0]),
            "the cycle must close"
        );
        assert!(
            lasso.cycle.iter().any(|state| automaton.accepting(state)),
            "the cycle must pass an accepting state"
        );
    }

    #[test]
    fn a_single_accepting_self_loop_yields_the_trivial_lasso() {
        let mut automaton = Explicit::new([0u8]);
        automaton.insert_transition(0, (), 0);
        automaton.insert_accepting(0);

        let lasso = find_accepting_run(&automaton).expect("the language is non-empty");
        assert_eq!(lasso.stem, vec![]);
        assert_eq!(lasso.cycle, vec![0]);
        assert_accepting_lasso(&automaton, &lasso);
    }

    #[test]
    fn accepting_states_outside_every_cycle_are_not_enough() {
        // 0 -> 1 -> 2, with a loop only on the non-accepting 2
        let mut automaton = Explicit::new([0u8]);
        automaton.insert_transition(0, (), 1);
        automaton.insert_transition(1, (), 2);
        automaton.insert_transition(2, (), 2);
        automaton.insert_accepting(1);

        assert_eq!(find_accepting_run(&automaton), None);
    }

    #[test]
    fn deadlocked_automata_are_empty() {
        let mut automaton = Explicit::new([0u8]);
        automaton.insert_transition(0, (), 1);
        automaton.insert_accepting(1);

        assert_eq!(find_accepting_run(&automaton), None);
    }

    #[test]
    fn the_lasso_reaches_a_distant_accepting_cycle() {
        let mut automaton = Explicit::new([0u8]);
        automaton.insert_transition(0, 'x', 1);
        automaton.insert_transition(1, 'x', 2);
        automaton.insert_transition(2, 'y', 3);
        automaton.insert_transition(3, 'y', 2);
        automaton.insert_accepting(3);

        let lasso = find_accepting_run(&automaton).expect("the language is non-empty");
        assert_accepting_lasso(&automaton, &lasso);
        assert_eq!(lasso.stem, vec![0, 1]);
        assert!(lasso.cycle == vec![2, 3] || lasso.cycle == vec![3, 2]);
    }

    #[test]
    fn search_covers_every_initial_state() {
        let mut automaton = Explicit::new([0u8, 10]);
        automaton.insert_transition(0, (), 1);
        automaton.insert_transition(1, (), 1);
        automaton.insert_transition(10, (), 11);
        automaton.insert_transition(11, (), 10);
        automaton.insert_accepting(11);

        let lasso = find_accepting_run(&automaton).expect("the language is non-empty");
        assert_accepting_lasso(&automaton, &lasso);
        assert_eq!(lasso.stem, vec![]);
        assert_eq!(lasso.cycle, vec![10, 11]);
    }
}
