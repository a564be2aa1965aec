pub mod search;
pub mod witness;

use {
    crate::{
        automata::{intersection::Intersection, kripke::Kripke, Lasso},
        syntax_tree::{ltl::Formula, Atom},
        translating::{degeneralization::degeneralize, nnf, tableau},
    },
    indexmap::IndexSet,
    std::hash::Hash,
};

/// Decides whether every fair run of `kripke` satisfies `specification`.
///
/// Returns `None` when the specification holds. Otherwise the returned lasso
/// is a fair run of the structure violating the specification: the stem leads
/// from an initial state into the cycle, whose infinite repetition refutes
/// the formula.
pub fn model_check<S, A>(kripke: &Kripke<S, A>, specification: &Formula<A>) -> Option<Lasso<S>>
where
    S: Clone + Eq + Hash,
    A: Atom + 'static,
{
    let claim = nnf::normalize(&Formula::not(specification.clone()));
    log::debug!("model checking a negated claim over {} atoms", claim.atoms().len());

    let model = degeneralize(kripke.clone(), claim.atoms().clone());
    let claim = tableau::tableau(&claim);
    let product = Intersection::new(model, claim, realized);

    let lasso = search::find_accepting_run(&product)?;
    log::debug!(
        "found an accepting product run: stem {}, cycle {}",
        lasso.stem.len(),
        lasso.cycle.len()
    );
    Some(witness::project(lasso))
}

/// A claim-side label (signed literals) is realized by a model-side label
/// (the atoms holding at the target state) iff every literal agrees.
fn realized<A: Eq + Hash>(model: &IndexSet<A>, claim: &IndexSet<(bool, A)>) -> bool {
    claim
        .iter()
        .all(|(truth, atom)| model.contains(atom) == *truth)
}
