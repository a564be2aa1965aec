use {
    crate::{automata::kripke::Kripke, automata::proposition::Proposition, syntax_tree::ltl::Formula},
    anyhow::{Context, Result},
    indexmap::IndexSet,
    std::{fs::read_to_string, path::Path},
};

pub fn read_formula(path: &Path) -> Result<Formula<Proposition<i64>>> {
    let content = read_to_string(path)
        .with_context(|| format!("could not read file `{}`", path.display()))?;
    content
        .parse()
        .with_context(|| format!("could not parse file `{}`", path.display()))
}

/// The reverse Collatz graph with all numbers taken modulo `modulus`:
/// from x, the successors are 2x and, when x = 4 (mod 6), also (x - 1) / 3.
pub fn reverse_collatz(modulus: i64) -> Kripke<i64, Proposition<i64>> {
    Kripke::new([1], move |x: &i64| {
        let mut successors = IndexSet::from([(2 * x) % modulus]);
        if x % 6 == 4 {
            successors.insert(((x - 1) / 3) % modulus);
        }
        successors
    })
}

/// The cyclic counter 0, 1, …, modulus - 1, 0, …
pub fn cycle(modulus: i64) -> Kripke<i64, Proposition<i64>> {
    Kripke::new([0], move |x: &i64| IndexSet::from([(x + 1) % modulus]))
}

#[cfg(test)]
mod tests {
    use {super::reverse_collatz, indexmap::IndexSet};

    #[test]
    fn collatz_branches_at_four_modulo_six() {
        let kripke = reverse_collatz(6);
        assert_eq!(kripke.successors(&1), IndexSet::from([2]));
        assert_eq!(kripke.successors(&2), IndexSet::from([4]));
        assert_eq!(kripke.successors(&4), IndexSet::from([2, 1]));
    }
}
