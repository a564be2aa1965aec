use crate::{
    convenience::apply::Apply as _,
    syntax_tree::{
        ltl::{Formula, Kind},
        Atom,
    },
};

/// Rewrites a formula into negation normal form.
///
/// `Not` survives only directly above atoms; `Global` and `Future` are
/// eliminated through their `Release`/`Until` duals:
///
///   G f = #false R f
///   F f = #true U f
pub fn normalize<A: Atom>(formula: &Formula<A>) -> Formula<A> {
    let top = Formula::atomic(A::top());
    let bottom = Formula::atomic(A::bottom());
    rewrite(formula, &top, &bottom)
}

fn rewrite<A: Atom>(formula: &Formula<A>, top: &Formula<A>, bottom: &Formula<A>) -> Formula<A> {
    match formula.kind() {
        Kind::Atomic(_) => formula.clone(),

        Kind::Until(lhs, rhs) => {
            Formula::until(rewrite(lhs, top, bottom), rewrite(rhs, top, bottom))
        }

        Kind::Release(lhs, rhs) => {
            Formula::release(rewrite(lhs, top, bottom), rewrite(rhs, top, bottom))
        }

        // G f = #false R f
        Kind::Global(inner) => Formula::release(bottom.clone(), rewrite(inner, top, bottom)),

        // F f = #true U f
        Kind::Future(inner) => Formula::until(top.clone(), rewrite(inner, top, bottom)),

        Kind::Or(lhs, rhs) => Formula::or(rewrite(lhs, top, bottom), rewrite(rhs, top, bottom)),

        Kind::And(lhs, rhs) => Formula::and(rewrite(lhs, top, bottom), rewrite(rhs, top, bottom)),

        Kind::Not(inner) => match inner.kind() {
            Kind::Atomic(_) => formula.clone(),

            Kind::Until(lhs, rhs) => Formula::release(
                rewrite(&Formula::not((**lhs).clone()), top, bottom),
                rewrite(&Formula::not((**rhs).clone()), top, bottom),
            ),

            Kind::Release(lhs, rhs) => Formula::until(
                rewrite(&Formula::not((**lhs).clone()), top, bottom),
                rewrite(&Formula::not((**rhs).clone()), top, bottom),
            ),

            // not (G f) = #true U (not f)
            Kind::Global(sub) => Formula::until(
                top.clone(),
                rewrite(&Formula::not((**sub).clone()), top, bottom),
            ),

            // not (F f) = #false R (not f)
            Kind::Future(sub) => Formula::release(
                bottom.clone(),
                rewrite(&Formula::not((**sub).clone()), top, bottom),
            ),

            Kind::And(lhs, rhs) => Formula::or(
                rewrite(&Formula::not((**lhs).clone()), top, bottom),
                rewrite(&Formula::not((**rhs).clone()), top, bottom),
            ),

            Kind::Or(lhs, rhs) => Formula::and(
                rewrite(&Formula::not((**lhs).clone()), top, bottom),
                rewrite(&Formula::not((**rhs).clone()), top, bottom),
            ),

            Kind::Not(sub) => rewrite(sub, top, bottom),
        },
    }
}

/// Collapses literal subtrees by re-running the folding constructors, so
/// `not`/`or`/`and` over atoms become single atoms wherever the atom hooks
/// permit it.
pub fn compress<A: Atom>(formula: Formula<A>) -> Formula<A> {
    formula.apply(&mut |node| match node.into_kind() {
        Kind::Atomic(atom) => Formula::atomic(atom),
        Kind::Not(sub) => Formula::not(*sub),
        Kind::Or(lhs, rhs) => Formula::or(*lhs, *rhs),
        Kind::And(lhs, rhs) => Formula::and(*lhs, *rhs),
        Kind::Global(sub) => Formula::global(*sub),
        Kind::Future(sub) => Formula::future(*sub),
        Kind::Until(lhs, rhs) => Formula::until(*lhs, *rhs),
        Kind::Release(lhs, rhs) => Formula::release(*lhs, *rhs),
    })
}
