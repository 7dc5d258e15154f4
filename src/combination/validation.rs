use log::{debug, warn};

use crate::combination::errors::CombinationError;

/// # Errors
///
/// Returns an error if `c` has more than `n` elements, is not strictly
/// increasing, or holds an element `>= n`.
pub fn validate_combination(n: usize, c: &[usize]) -> Result<(), CombinationError> {
    debug!("Validating combination {:?} for n={}", c, n);

    if c.len() > n {
        warn!("Combination of size {} cannot be drawn from {}", c.len(), n);
        return Err(CombinationError::KExceedsN { n, k: c.len() });
    }

    if let Some(position) = c
        .windows(2)
        .position(|pair| matches!(pair, [left, right] if left >= right))
    {
        warn!("Combination {:?} is not strictly increasing", c);
        return Err(CombinationError::NotStrictlyIncreasing {
            position: position + 1,
            values: c.to_vec(),
        });
    }

    if let Some(&value) = c.last().filter(|&&value| value >= n) {
        warn!("Combination element {} out of range for n={}", value, n);
        return Err(CombinationError::OutOfRange { value, n });
    }

    Ok(())
}
