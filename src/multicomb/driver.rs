use log::{debug, warn};

use crate::multicomb::errors::MultiCombError;
use crate::multicomb::level::Level;

/// One selection per level, as universe elements.
pub type Row = Vec<Vec<usize>>;

/// Enumerates combinations of combinations: level 0 picks `ks[0]` elements of
/// the universe, level 1 picks `ks[1]` of what is left, and so on.
///
/// Rows come in odometer order. The last level cycles fastest; whenever a
/// level advances, every level after it restarts at its first combination
/// over the new remainder.
#[derive(Debug, Clone)]
pub struct MultiComb {
    ks: Vec<usize>,
    levels: Vec<Level>,
    ended: bool,
}

impl MultiComb {
    /// Levels over the universe `0..n`.
    ///
    /// # Errors
    ///
    /// Returns `MultiCombError::InsufficientUniverse` if the sizes in `ks`
    /// add up to more than `n`.
    pub fn new(n: usize, ks: &[usize]) -> Result<Self, MultiCombError> {
        Self::with_universe((0..n).collect(), ks)
    }

    /// # Errors
    ///
    /// Returns an error if `universe` is not strictly increasing or the sizes
    /// in `ks` add up to more than its length.
    pub fn with_universe(universe: Vec<usize>, ks: &[usize]) -> Result<Self, MultiCombError> {
        if universe
            .windows(2)
            .any(|pair| matches!(pair, [left, right] if left >= right))
        {
            warn!("Rejecting unsorted universe {:?}", universe);
            return Err(MultiCombError::UnsortedUniverse(universe));
        }

        debug!(
            "Building multi-combination over {} elements with sizes {:?}",
            universe.len(),
            ks
        );
        let levels = build_levels(universe, ks, 0)?;
        Ok(Self {
            ks: ks.to_vec(),
            levels,
            ended: false,
        })
    }

    pub fn ks(&self) -> &[usize] {
        &self.ks
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The current row, or `None` once the enumeration has ended.
    pub fn current(&self) -> Option<Row> {
        if self.ended {
            return None;
        }
        Some(self.levels.iter().map(Level::selected).collect())
    }

    /// Steps to the next row and returns it, or `None` when there is none.
    pub fn advance(&mut self) -> Option<Row> {
        if self.ended {
            return None;
        }

        let Some(movable) = self.levels.iter().rposition(|level| !level.is_last()) else {
            debug!("All levels exhausted");
            self.ended = true;
            return None;
        };

        let remainder = match self.levels.get_mut(movable) {
            Some(level) => {
                level.advance();
                level.unused()
            }
            None => Vec::new(),
        };

        let later_ks = self.ks.get(movable + 1..).unwrap_or_default();
        match build_levels(remainder, later_ks, movable + 1) {
            Ok(rebuilt) => {
                self.levels.truncate(movable + 1);
                self.levels.extend(rebuilt);
            }
            Err(err) => {
                warn!("Failed to rebuild levels after {}: {}", movable, err);
                self.ended = true;
            }
        }
        self.current()
    }
}

/// Builds one level per size, each on what the previous one leaves at its
/// first combination (the lut minus its first `k` elements).
fn build_levels(
    mut remaining: Vec<usize>,
    ks: &[usize],
    first_level: usize,
) -> Result<Vec<Level>, MultiCombError> {
    let mut levels = Vec::with_capacity(ks.len());
    for (offset, &k) in ks.iter().enumerate() {
        let Some(tail) = remaining.get(k..).map(<[usize]>::to_vec) else {
            warn!(
                "Level {} needs {} elements, only {} remain",
                first_level + offset,
                k,
                remaining.len()
            );
            return Err(MultiCombError::InsufficientUniverse {
                level: first_level + offset,
                k,
                remaining: remaining.len(),
            });
        };
        levels.push(Level::new(k, remaining)?);
        remaining = tail;
    }
    Ok(levels)
}

/// Yields the first row, then every row [`MultiComb::advance`] produces.
#[derive(Debug, Clone)]
pub struct Rows {
    driver: MultiComb,
    started: bool,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.driver.advance()
        } else {
            self.started = true;
            self.driver.current()
        }
    }
}

impl IntoIterator for MultiComb {
    type Item = Row;
    type IntoIter = Rows;

    fn into_iter(self) -> Self::IntoIter {
        Rows {
            driver: self,
            started: false,
        }
    }
}
