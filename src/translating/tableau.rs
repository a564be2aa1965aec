use {
    crate::{
        automata::kripke::Kripke,
        syntax_tree::{
            ltl::{Formula, Kind},
            Atom,
        },
        translating::degeneralization::{degeneralize, Degeneralization},
    },
    indexmap::{IndexMap, IndexSet},
    petgraph::{graphmap::DiGraphMap, Direction},
    std::rc::Rc,
};

/// Identifier of a tableau node. Ids are local to one construction.
pub type NodeId = i64;

/// Pseudo-node anchoring the initial states of the tableau.
const ROOT: NodeId = -1;

#[derive(Clone, Debug)]
struct Node<A> {
    id: NodeId,
    new: IndexSet<Formula<A>>,
    now: IndexSet<Formula<A>>,
    next: IndexSet<Formula<A>>,
}

struct Construction<A> {
    count: NodeId,
    open: IndexMap<NodeId, Node<A>>,
    closed: IndexMap<NodeId, Node<A>>,
    relations: DiGraphMap<NodeId, ()>,
    untils: IndexSet<Formula<A>>,
}

impl<A: Atom> Construction<A> {
    fn fresh(
        &mut self,
        new: IndexSet<Formula<A>>,
        now: IndexSet<Formula<A>>,
        next: IndexSet<Formula<A>>,
    ) -> Node<A> {
        self.count += 1;
        Node {
            id: self.count,
            new,
            now,
            next,
        }
    }

    fn expand(formula: &Formula<A>) -> Self {
        let mut construction = Construction {
            count: 0,
            open: IndexMap::new(),
            closed: IndexMap::new(),
            relations: DiGraphMap::new(),
            untils: IndexSet::new(),
        };

        let first = construction.fresh(
            IndexSet::from([formula.clone()]),
            IndexSet::new(),
            IndexSet::new(),
        );
        construction.relations.add_edge(ROOT, first.id, ());
        construction.open.insert(first.id, first);

        while let Some((_, mut node)) = construction.open.pop() {
            match node.new.pop() {
                None => construction.update_closed(node),
                Some(obligation) => {
                    node.now.insert(obligation.clone());
                    construction.update_split(&mut node, obligation);
                    construction.open.insert(node.id, node);
                }
            }
        }

        construction
    }

    /// Fully expanded nodes either merge into a closed node with the same
    /// `(now, next)` pair, redirecting their incoming edges, or close
    /// themselves and spawn the successor node obliged by `next`.
    fn update_closed(&mut self, node: Node<A>) {
        let merged = self
            .closed
            .values()
            .find(|closed| closed.now == node.now && closed.next == node.next)
            .map(|closed| closed.id);

        match merged {
            Some(target) => {
                let predecessors: Vec<NodeId> = self
                    .relations
                    .neighbors_directed(node.id, Direction::Incoming)
                    .collect();
                for predecessor in predecessors {
                    self.relations.add_edge(predecessor, target, ());
                }
                self.relations.remove_node(node.id);
            }
            None => {
                let successor = self.fresh(node.next.clone(), IndexSet::new(), IndexSet::new());
                self.relations.add_edge(node.id, successor.id, ());
                self.open.insert(successor.id, successor);
                self.closed.insert(node.id, node);
            }
        }
    }

    /// A twin inherits copies of `new`, `now`, `next` and duplicates of every
    /// incoming edge.
    fn split(&mut self, node: &Node<A>) -> Node<A> {
        let twin = self.fresh(node.new.clone(), node.now.clone(), node.next.clone());
        let predecessors: Vec<NodeId> = self
            .relations
            .neighbors_directed(node.id, Direction::Incoming)
            .collect();
        for predecessor in predecessors {
            self.relations.add_edge(predecessor, twin.id, ());
        }
        twin
    }

    fn update_split(&mut self, node: &mut Node<A>, obligation: Formula<A>) {
        match obligation.kind() {
            Kind::Atomic(_) => {}

            Kind::Not(sub) if matches!(sub.kind(), Kind::Atomic(_)) => {}

            Kind::Or(lhs, rhs) => {
                let mut twin = self.split(node);
                node.new.insert((**lhs).clone());
                twin.new.insert((**rhs).clone());
                self.open.insert(twin.id, twin);
            }

            Kind::And(lhs, rhs) => {
                node.new.insert((**lhs).clone());
                node.new.insert((**rhs).clone());
            }

            Kind::Until(lhs, rhs) => {
                let mut twin = self.split(node);
                node.new.insert((**rhs).clone());
                // the twin postpones the obligation by one step
                twin.new.insert((**lhs).clone());
                twin.next.insert(obligation.clone());
                self.open.insert(twin.id, twin);
                self.untils.insert(obligation);
            }

            Kind::Release(lhs, rhs) => {
                let mut twin = self.split(node);
                node.new.insert((**lhs).clone());
                node.new.insert((**rhs).clone());
                twin.new.insert((**rhs).clone());
                twin.next.insert(obligation);
                self.open.insert(twin.id, twin);
            }

            Kind::Not(_) => {
                panic!("`not` may only guard atoms here; the formula must be normalized first")
            }
            Kind::Global(_) => {
                panic!("`G` must not reach the tableau; the formula must be normalized first")
            }
            Kind::Future(_) => {
                panic!("`F` must not reach the tableau; the formula must be normalized first")
            }
        }
    }
}

/// The Gerth-Peled-Vardi-Wolper tableau construction.
///
/// Expands the normalized formula into a graph of `(new, now, next)` nodes and
/// reads it back as a Kripke structure over node ids: node labels are the
/// signed literals recorded in `now`, and every collected `Until` contributes
/// one fairness constraint (satisfied at nodes where the right-hand side holds
/// or the obligation is absent). The counter product then yields a Büchi
/// automaton for the formula's language.
pub fn tableau<A: Atom + 'static>(formula: &Formula<A>) -> Degeneralization<NodeId, (bool, A)> {
    let construction = Construction::expand(formula);
    log::debug!(
        "tableau closed with {} nodes and {} until obligations",
        construction.closed.len(),
        construction.untils.len()
    );

    let alphabet: IndexSet<(bool, A)> = formula
        .atoms()
        .iter()
        .flat_map(|atom| [(true, atom.clone()), (false, atom.clone())])
        .collect();

    let initial: Vec<NodeId> = construction
        .relations
        .neighbors_directed(ROOT, Direction::Outgoing)
        .collect();

    let Construction {
        closed,
        relations,
        untils,
        ..
    } = construction;
    let graph = Rc::new((closed, relations));

    let successors = {
        let graph = Rc::clone(&graph);
        move |id: &NodeId| {
            graph
                .1
                .neighbors_directed(*id, Direction::Outgoing)
                .collect::<IndexSet<NodeId>>()
        }
    };

    let labeling = {
        let graph = Rc::clone(&graph);
        move |id: &NodeId, (truth, atom): &(bool, A)| {
            let literal = if *truth {
                Formula::atomic(atom.clone())
            } else {
                Formula::raw(Kind::Not(Formula::atomic(atom.clone()).into()))
            };
            graph.0[id].now.contains(&literal)
        }
    };

    let mut kripke = Kripke::labeled(initial, successors, labeling);
    for until in untils {
        let satisfied = match until.kind() {
            Kind::Until(_, rhs) => (**rhs).clone(),
            _ => unreachable!("only `U` formulas are collected during expansion"),
        };
        let graph = Rc::clone(&graph);
        kripke = kripke.with_fairness(move |id: &NodeId| {
            let node = &graph.0[id];
            node.now.contains(&satisfied) || !node.now.contains(&until)
        });
    }

    degeneralize(kripke, alphabet)
}

#[cfg(test)]
mod tests {
    use {
        super::{tableau, Construction},
        crate::{
            syntax_tree::{fixtures::Letter, ltl::Formula},
            translating::nnf::normalize,
        },
    };

    #[test]
    fn closed_node_count_stays_within_the_closure_bound() {
        // p U q has three subformulas, so at most 2^3 distinct (now, next)
        // pairs can survive merging
        let formula = Formula::until(Formula::atomic(Letter::P), Formula::atomic(Letter::Q));
        let construction = Construction::expand(&formula);
        assert!(construction.open.is_empty());
        assert!(!construction.closed.is_empty());
        assert!(construction.closed.len() <= 8);
    }

    #[test]
    fn until_obligations_are_collected_for_fairness() {
        let until = Formula::until(Formula::atomic(Letter::P), Formula::atomic(Letter::Q));
        let formula = Formula::and(until.clone(), Formula::not(Formula::atomic(Letter::R)));
        let construction = Construction::expand(&formula);
        assert_eq!(
            construction.untils.into_iter().collect::<Vec<_>>(),
            vec![until]
        );
    }

    #[test]
    fn release_produces_no_fairness_obligation() {
        let formula = Formula::release(Formula::atomic(Letter::P), Formula::atomic(Letter::Q));
        let construction = Construction::expand(&formula);
        assert!(construction.untils.is_empty());
    }

    #[test]
    fn literals_are_recorded_in_now() {
        let formula = normalize(&Formula::not(Formula::or(
            Formula::atomic(Letter::P),
            Formula::atomic(Letter::Q),
        )));
        let construction = Construction::expand(&formula);
        let literal = Formula::not(Formula::atomic(Letter::P));
        assert!(construction
            .closed
            .values()
            .any(|node| node.now.contains(&literal)));
    }

    #[test]
    #[should_panic(expected = "normalized")]
    fn unnormalized_connectives_are_rejected() {
        tableau(&Formula::global(Formula::atomic(Letter::P)));
    }
}
