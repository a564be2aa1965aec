use {
    clap::{Parser, Subcommand, ValueEnum},
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a given LTL specification
    Translate {
        /// The translation to use
        #[arg(long, value_enum)]
        with: Translation,

        /// The file holding the specification
        input: PathBuf,
    },

    /// Model check an LTL specification against a built-in model family
    Check {
        /// The model family to check against
        #[arg(long, value_enum)]
        model: Model,

        /// The modulus bounding the state space of the model family
        #[arg(long, short, default_value_t = 1170)]
        modulus: i64,

        /// The file holding the specification
        input: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Translation {
    /// Negation normal form without `G` and `F`
    Nnf,
    /// Fold literal subtrees into single propositions
    Compress,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Model {
    /// The reverse Collatz graph, taken modulo the modulus
    Collatz,
    /// The cyclic counter x -> x + 1 modulo the modulus
    Cycle,
}
