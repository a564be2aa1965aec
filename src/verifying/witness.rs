use crate::{automata::Lasso, translating::tableau::NodeId};

/// A state of the product automaton: the degeneralized structure on the left,
/// the degeneralized tableau on the right, and the intersection phase.
pub(crate) type Product<S> = ((Option<S>, usize), (Option<NodeId>, usize), u8);

/// Projects a product lasso onto Kripke states and shortens it.
///
/// Counters, phases, and the synthetic start states carry no information for
/// the caller. The tableau node is kept through the clipping steps so that
/// only genuinely repeated configurations collapse, and dropped last.
pub(crate) fn project<S: Clone + PartialEq>(lasso: Lasso<Product<S>>) -> Lasso<S> {
    let (raw_stem, raw_cycle) = (lasso.stem.len(), lasso.cycle.len());
    let mut stem = clip(extract(lasso.stem));
    let mut cycle = clip(extract(lasso.cycle));
    log::debug!(
        "clipped the witness from {raw_stem}+{raw_cycle} to {}+{} states",
        stem.len(),
        cycle.len()
    );

    // cut the stem at its earliest re-occurrence inside the cycle and rotate
    // the cycle to start there
    let overlap = stem.iter().enumerate().find_map(|(i, state)| {
        cycle
            .iter()
            .position(|other| other == state)
            .map(|j| (i, j))
    });
    if let Some((i, j)) = overlap {
        stem.truncate(i);
        cycle.rotate_left(j);
    }

    Lasso {
        stem: stem.into_iter().map(|(state, _)| state).collect(),
        cycle: cycle.into_iter().map(|(state, _)| state).collect(),
    }
}

fn extract<S>(sequence: Vec<Product<S>>) -> Vec<(S, NodeId)> {
    sequence
        .into_iter()
        .filter_map(|((state, _), (node, _), _)| Some((state?, node?)))
        .collect()
}

/// Removes redundant excursions: every element jumps forward to its own last
/// occurrence in the sequence.
fn clip<T: PartialEq + Clone>(sequence: Vec<T>) -> Vec<T> {
    let mut clipped = Vec::new();
    let mut index = 0;
    while index < sequence.len() {
        let last = (index..sequence.len())
            .rev()
            .find(|&candidate| sequence[candidate] == sequence[index])
            .unwrap_or(index);
        clipped.push(sequence[last].clone());
        index = last + 1;
    }
    clipped
}

#[cfg(test)]
mod tests {
    use {
        super::{clip, project, Product},
        crate::automata::Lasso,
    };

    fn entry(state: i64, node: i64) -> Product<i64> {
        ((Some(state), 0), (Some(node), 0), 0)
    }

    #[test]
    fn clip_jumps_to_the_last_occurrence() {
        assert_eq!(clip(vec![1, 2, 3, 2, 4]), vec![1, 2, 4]);
        assert_eq!(clip(vec![1, 1, 1]), vec![1]);
        assert_eq!(clip(vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(clip(Vec::<i64>::new()), vec![]);
    }

    #[test]
    fn synthetic_start_states_are_dropped() {
        let lasso = Lasso {
            stem: vec![((None, 0), (None, 0), 0), entry(7, 1)],
            cycle: vec![entry(8, 2)],
        };
        let projected = project(lasso);
        assert_eq!(projected.stem, vec![7]);
        assert_eq!(projected.cycle, vec![8]);
    }

    #[test]
    fn overlapping_stems_rotate_into_the_cycle() {
        // the stem runs 5, 6 and the cycle 7, 6: the 6 at stem position 1
        // already lies on the cycle, so the final cycle starts there
        let lasso = Lasso {
            stem: vec![entry(5, 1), entry(6, 2)],
            cycle: vec![entry(7, 3), entry(6, 2)],
        };
        let projected = project(lasso);
        assert_eq!(projected.stem, vec![5]);
        assert_eq!(projected.cycle, vec![6, 7]);
    }

    #[test]
    fn distinct_tableau_nodes_keep_repeated_states_apart() {
        // the same Kripke state under different tableau nodes is not redundant
        let lasso = Lasso {
            stem: vec![],
            cycle: vec![entry(0, 1), entry(0, 2)],
        };
        let projected = project(lasso);
        assert_eq!(projected.cycle, vec![0, 0]);
    }
}
