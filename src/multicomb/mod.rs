//! Simultaneous enumeration of nested, disjoint combinations

mod driver;
mod errors;
mod level;
mod parallel;

pub use driver::{MultiComb, Row, Rows};
pub use errors::MultiCombError;
pub use level::Level;
pub use parallel::{par_rows, par_rows_limited};

#[cfg(test)]
mod tests;
