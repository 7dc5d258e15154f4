use crate::combination::errors::CombinationError;
use crate::combination::state::Combination;
use crate::combination::step::Stepper;

/// Iterator over every `k`-combination of `0..n` in lexicographic order
#[derive(Debug, Clone)]
pub struct Combinations {
    current: Option<Combination>,
    stepper: Stepper,
}

impl Combinations {
    /// # Errors
    ///
    /// Returns `CombinationError::KExceedsN` if `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self, CombinationError> {
        Self::with_stepper(n, k, Stepper::default())
    }

    /// # Errors
    ///
    /// Returns `CombinationError::KExceedsN` if `k > n`.
    pub fn with_stepper(n: usize, k: usize, stepper: Stepper) -> Result<Self, CombinationError> {
        Ok(Self {
            current: Some(Combination::first(n, k)?),
            stepper,
        })
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.indices().to_vec();
        if !current.advance(self.stepper) {
            self.current = None;
        }
        Some(item)
    }
}
