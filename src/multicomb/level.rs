use log::trace;

use crate::combination::{Combination, Stepper};
use crate::multicomb::errors::MultiCombError;

/// One level of a [`MultiComb`](crate::multicomb::MultiComb): a combination
/// of local indices into the elements still available to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    lut: Vec<usize>,
    comb: Combination,
}

impl Level {
    /// Starts at the first `k` elements of `lut`.
    ///
    /// # Errors
    ///
    /// Returns `MultiCombError::LutTooShort` if `k > lut.len()`.
    pub fn new(k: usize, lut: Vec<usize>) -> Result<Self, MultiCombError> {
        if k > lut.len() {
            return Err(MultiCombError::LutTooShort {
                k,
                available: lut.len(),
            });
        }
        let comb = Combination::first(lut.len(), k)?;
        trace!("New level choosing {} of {:?}", k, lut);
        Ok(Self { lut, comb })
    }

    pub fn lut(&self) -> &[usize] {
        &self.lut
    }

    pub fn n(&self) -> usize {
        self.lut.len()
    }

    pub fn k(&self) -> usize {
        self.comb.k()
    }

    /// Universe elements picked by the current combination.
    pub fn selected(&self) -> Vec<usize> {
        self.comb
            .indices()
            .iter()
            .filter_map(|&index| self.lut.get(index).copied())
            .collect()
    }

    /// Elements of the lut not picked by the current combination, in lut order.
    pub fn unused(&self) -> Vec<usize> {
        let mut picked = self.comb.indices().iter().peekable();
        self.lut
            .iter()
            .enumerate()
            .filter_map(|(index, &value)| match picked.next_if_eq(&&index) {
                Some(_) => None,
                None => Some(value),
            })
            .collect()
    }

    pub fn is_last(&self) -> bool {
        self.comb.is_last()
    }

    pub fn advance(&mut self) -> bool {
        self.comb.advance(Stepper::Standard)
    }
}
