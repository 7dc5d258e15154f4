use std::fmt;

use log::{debug, warn};

use crate::multiset::errors::MultiSetError;

/// A multiset of size `k` over the categories `0..n`, stored as the
/// multiplicity of each category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiSet {
    multiplicity: Vec<usize>,
}

impl MultiSet {
    /// All `k` items in category 0.
    ///
    /// # Errors
    ///
    /// Returns `MultiSetError::EmptyCategories` if `n == 0` while `k > 0`.
    pub fn new(n: usize, k: usize) -> Result<Self, MultiSetError> {
        let mut multiplicity = vec![0; n];
        match multiplicity.first_mut() {
            Some(first) => *first = k,
            None if k > 0 => return Err(MultiSetError::EmptyCategories { k }),
            None => {}
        }
        Ok(Self { multiplicity })
    }

    pub fn from_multiplicity(multiplicity: Vec<usize>) -> Self {
        Self { multiplicity }
    }

    /// Builds the multiset from its sorted flat form, e.g. `[0, 0, 2]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `flat` is not sorted or names a category `>= n`.
    pub fn from_flat(n: usize, flat: &[usize]) -> Result<Self, MultiSetError> {
        if let Some(position) = flat
            .windows(2)
            .position(|pair| matches!(pair, [left, right] if left > right))
        {
            warn!("Flat multiset {:?} is not sorted", flat);
            return Err(MultiSetError::UnsortedFlat {
                position: position + 1,
            });
        }

        let mut multiplicity = vec![0; n];
        for &category in flat {
            let slot = multiplicity
                .get_mut(category)
                .ok_or(MultiSetError::CategoryOutOfRange { category, n })?;
            *slot += 1;
        }
        Ok(Self { multiplicity })
    }

    /// Stars and bars: `bars` are the positions of the `n - 1` separators
    /// among `n + k - 1` slots; the gaps between them are the multiplicities.
    ///
    /// # Errors
    ///
    /// Returns an error if the bars are not strictly increasing or fall
    /// outside the available slots.
    pub fn from_bars(k: usize, bars: &[usize]) -> Result<Self, MultiSetError> {
        let slots = bars.len() + k;
        debug!("Building multiset of size {} from bars {:?}", k, bars);

        let mut multiplicity = Vec::with_capacity(bars.len() + 1);
        let mut next_free = 0;
        for (position, &bar) in bars.iter().enumerate() {
            if bar >= slots {
                warn!("Bar {} outside {} slots", bar, slots);
                return Err(MultiSetError::BarOutOfRange { bar, slots });
            }
            if bar < next_free {
                warn!("Bars {:?} not strictly increasing", bars);
                return Err(MultiSetError::BarsNotIncreasing {
                    position,
                    bars: bars.to_vec(),
                });
            }
            multiplicity.push(bar - next_free);
            next_free = bar + 1;
        }

        let used: usize = multiplicity.iter().sum();
        let last = k
            .checked_sub(used)
            .ok_or(MultiSetError::Overfull { k, used })?;
        multiplicity.push(last);
        Ok(Self { multiplicity })
    }

    /// Number of categories.
    pub fn n(&self) -> usize {
        self.multiplicity.len()
    }

    /// Number of items.
    pub fn k(&self) -> usize {
        self.multiplicity.iter().sum()
    }

    pub fn multiplicity(&self) -> &[usize] {
        &self.multiplicity
    }

    /// Category indices in ascending order, each repeated by its multiplicity.
    pub fn flat(&self) -> Vec<usize> {
        self.multiplicity
            .iter()
            .enumerate()
            .flat_map(|(category, &count)| std::iter::repeat_n(category, count))
            .collect()
    }

    /// Separator positions; the inverse of [`MultiSet::from_bars`].
    pub fn bars(&self) -> Vec<usize> {
        let separators = self.n().saturating_sub(1);
        self.multiplicity
            .iter()
            .take(separators)
            .scan(0, |cumulative, &count| {
                *cumulative += count;
                Some(*cumulative)
            })
            .enumerate()
            .map(|(position, cumulative)| cumulative + position)
            .collect()
    }
}

impl fmt::Display for MultiSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{MS: n={} {:?}}}", self.n(), self.flat())
    }
}
