//! Multisets and their stars-and-bars correspondence with combinations

mod errors;
mod iter;
mod set;

pub use errors::MultiSetError;
pub use iter::Multisets;
pub use set::MultiSet;
