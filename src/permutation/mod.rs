//! Lexicographic permutation stepping

mod iter;
mod step;

pub use iter::Permutations;
pub use step::next_permutation;
