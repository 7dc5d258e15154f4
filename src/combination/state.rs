use log::debug;

use crate::combination::errors::CombinationError;
use crate::combination::step::{Stepper, step_with};
use crate::combination::validation::validate_combination;

/// A validated `k`-combination of `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    n: usize,
    indices: Vec<usize>,
}

impl Combination {
    /// The lexicographically first combination, `(0, 1, ..., k-1)`.
    ///
    /// # Errors
    ///
    /// Returns `CombinationError::KExceedsN` if `k > n`.
    pub fn first(n: usize, k: usize) -> Result<Self, CombinationError> {
        if k > n {
            return Err(CombinationError::KExceedsN { n, k });
        }
        debug!("Starting {}-combinations of {}", k, n);
        Ok(Self {
            n,
            indices: (0..k).collect(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if `indices` is not a valid combination of `0..n`.
    pub fn from_indices(n: usize, indices: Vec<usize>) -> Result<Self, CombinationError> {
        validate_combination(n, &indices)?;
        Ok(Self { n, indices })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.indices.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Whether this is `(n-k, ..., n-1)`, the last combination.
    pub fn is_last(&self) -> bool {
        self.indices
            .first()
            .is_none_or(|&first| first == self.n - self.k())
    }

    /// Moves to the next combination; `false` when already at the last one.
    pub fn advance(&mut self, stepper: Stepper) -> bool {
        step_with(stepper, self.n, &mut self.indices)
    }
}
