//! Integer helpers: gcd, lcm, factorial and the binomial coefficient

mod binomial;
mod errors;
mod gcd;

pub use binomial::{choose, multichoose};
pub use errors::ArithError;
pub use gcd::{factorial, gcd, lcm};

#[cfg(test)]
mod tests;
