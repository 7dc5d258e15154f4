use crate::combination::errors::CombinationError;
use crate::combination::validation::validate_combination;

/// Selects how a combination is advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepper {
    /// Scans from the back for the rightmost element that can grow
    #[default]
    Standard,
    /// Bumps the last element directly when it has room, scanning otherwise
    Fast,
}

/// Rightmost position that can still grow: element `i` of a `k`-combination
/// tops out at `n - k + i`. `None` when the combination is the last one.
fn growth_position(n: usize, c: &[usize]) -> Option<usize> {
    let floor = n - c.len();
    c.iter()
        .enumerate()
        .rposition(|(position, &value)| value < floor + position)
}

/// Advances a well-formed combination in place. Returns `false`, leaving `c`
/// as is, when `c` is `(n-k, ..., n-1)`.
pub(crate) fn step_standard(n: usize, c: &mut [usize]) -> bool {
    let Some(position) = growth_position(n, c) else {
        return false;
    };
    let Some((grown, tail)) = c.get_mut(position..).and_then(<[usize]>::split_first_mut) else {
        return false;
    };
    *grown += 1;
    for (offset, value) in tail.iter_mut().enumerate() {
        *value = *grown + offset + 1;
    }
    true
}

/// Same result as [`step_standard`], in O(1) whenever only the last element moves.
pub(crate) fn step_fast(n: usize, c: &mut [usize]) -> bool {
    if let Some(last) = c.last_mut() {
        if *last + 1 < n {
            *last += 1;
            return true;
        }
    }
    step_standard(n, c)
}

pub(crate) fn step_with(stepper: Stepper, n: usize, c: &mut [usize]) -> bool {
    match stepper {
        Stepper::Standard => step_standard(n, c),
        Stepper::Fast => step_fast(n, c),
    }
}

/// Advances `c` to the next `k`-combination of `0..n` in lexicographic order.
///
/// Returns `Ok(None)` once `c` is the last combination; `c` is then left unchanged.
///
/// # Errors
///
/// Returns an error if `c` is not a valid combination of `0..n`.
pub fn combination_next(n: usize, c: &mut [usize]) -> Result<Option<&[usize]>, CombinationError> {
    validate_combination(n, c)?;
    Ok(step_standard(n, c).then_some(&*c))
}

/// Like [`combination_next`], skipping the scan when the last element can simply grow.
///
/// # Errors
///
/// Returns an error if `c` is not a valid combination of `0..n`.
pub fn fast_combination_next(
    n: usize,
    c: &mut [usize],
) -> Result<Option<&[usize]>, CombinationError> {
    validate_combination(n, c)?;
    Ok(step_fast(n, c).then_some(&*c))
}
