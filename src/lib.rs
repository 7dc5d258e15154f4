//! Combinatorix - enumeration of permutations, combinations and multisets
//!
//! This library steps through permutations and k-combinations in
//! lexicographic order, counts them exactly, maps multisets onto
//! combinations via stars and bars, and enumerates nested disjoint
//! combinations level by level.
//!
//! # Examples
//!
//! ```
//! use combinatorix::{BigUint, Combinations, choose};
//!
//! let all: Vec<Vec<usize>> = Combinations::new(4, 2)?.collect();
//! assert_eq!(all.first(), Some(&vec![0, 1]));
//! assert_eq!(choose(4, 2)?, BigUint::from(all.len()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod arith;
pub mod combination;
pub mod multicomb;
pub mod multiset;
pub mod permutation;

// Re-export the main public API
pub use num_bigint::BigUint;
pub use arith::{ArithError, choose, factorial, gcd, lcm, multichoose};
pub use combination::{
    Combination, CombinationError, Combinations, Stepper, combination_next,
    fast_combination_next,
};
pub use multicomb::{Level, MultiComb, MultiCombError, Row, par_rows, par_rows_limited};
pub use multiset::{MultiSet, MultiSetError, Multisets};
pub use permutation::{Permutations, next_permutation};
