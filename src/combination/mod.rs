//! k-combinations of `0..n` in lexicographic order

mod errors;
mod iter;
mod state;
mod step;
mod validation;

pub use errors::CombinationError;
pub use iter::Combinations;
pub use state::Combination;
pub use step::{Stepper, combination_next, fast_combination_next};
pub use validation::validate_combination;
