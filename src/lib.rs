pub mod automata;
pub mod command_line;
pub mod convenience;
pub mod formatting;
pub mod parsing;
pub mod syntax_tree;
pub mod translating;
pub mod verifying;

use {
    crate::{
        command_line::{
            procedures::{cycle, read_formula, reverse_collatz},
            Arguments, Command, Model, Translation,
        },
        translating::nnf,
    },
    anyhow::{ensure, Result},
    clap::Parser as _,
};

pub fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    match Arguments::parse().command {
        Command::Translate { with, input } => {
            let specification = read_formula(&input)?;

            match with {
                Translation::Nnf => println!("{}", nnf::normalize(&specification)),
                Translation::Compress => println!("{}", nnf::compress(specification)),
            }

            Ok(())
        }

        Command::Check {
            model,
            modulus,
            input,
        } => {
            ensure!(modulus > 0, "the modulus must be positive");
            let specification = read_formula(&input)?;

            let kripke = match model {
                Model::Collatz => reverse_collatz(modulus),
                Model::Cycle => cycle(modulus),
            };

            match verifying::model_check(&kripke, &specification) {
                None => println!("The LTL specification holds."),
                Some(lasso) => {
                    println!("The LTL specification does not hold.");
                    println!("Stem:");
                    for state in &lasso.stem {
                        println!("{state}");
                    }
                    println!("Loop:");
                    for state in &lasso.cycle {
                        println!("{state}");
                    }
                }
            }

            Ok(())
        }
    }
}
