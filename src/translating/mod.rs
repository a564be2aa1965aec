pub mod degeneralization;
pub mod nnf;
pub mod tableau;
