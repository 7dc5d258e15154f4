use log::{debug, warn};

use crate::combination::Combinations;
use crate::multiset::errors::MultiSetError;
use crate::multiset::set::MultiSet;

/// Iterator over every multiset of size `k` drawn from `n` categories.
///
/// Each multiset corresponds to one choice of `n - 1` bar positions among
/// `n + k - 1` slots, so the order follows the bar combinations.
#[derive(Debug, Clone)]
pub struct Multisets {
    k: usize,
    bars: Combinations,
}

impl Multisets {
    /// # Errors
    ///
    /// Returns `MultiSetError::EmptyCategories` if `n == 0`.
    pub fn new(n: usize, k: usize) -> Result<Self, MultiSetError> {
        let Some(separators) = n.checked_sub(1) else {
            warn!("Multisets need at least one category");
            return Err(MultiSetError::EmptyCategories { k });
        };
        debug!("Enumerating multisets: n={}, k={}", n, k);
        Ok(Self {
            k,
            bars: Combinations::new(separators + k, separators)?,
        })
    }
}

impl Iterator for Multisets {
    type Item = MultiSet;

    fn next(&mut self) -> Option<Self::Item> {
        let bars = self.bars.next()?;
        match MultiSet::from_bars(self.k, &bars) {
            Ok(multiset) => Some(multiset),
            Err(err) => {
                warn!("Stopping multiset enumeration: {}", err);
                None
            }
        }
    }
}
