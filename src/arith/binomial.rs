use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::One;

use crate::arith::errors::ArithError;
use crate::arith::gcd::gcd;

/// Number of `k`-subsets of an `n`-set.
///
/// The numerator `n (n-1) ... (n-k+1)` is kept as separate terms and every
/// divisor `2..=k` is cancelled out of them through common factors before
/// anything is multiplied, so the product is exact with no division left.
///
/// # Errors
///
/// Returns `ArithError::InvalidArgument` if `k > n`.
pub fn choose(n: u64, k: u64) -> Result<BigUint, ArithError> {
    if k > n {
        warn!("choose({}, {}): k exceeds n", n, k);
        return Err(ArithError::InvalidArgument { n, k });
    }

    let k_small = k.min(n - k);
    let mut terms: Vec<u128> = (0..k_small).map(|i| u128::from(n - i)).collect();

    for divisor in 2..=u128::from(k_small) {
        let mut remaining = divisor;
        for term in terms.iter_mut() {
            if remaining == 1 {
                break;
            }
            let common = gcd(*term, remaining);
            if common > 1 {
                remaining /= common;
                *term /= common;
            }
        }
        if remaining != 1 {
            return Err(ArithError::InexactCancellation {
                n,
                k,
                divisor: remaining,
            });
        }
    }

    let result = terms
        .into_iter()
        .fold(BigUint::one(), |acc, term| acc * BigUint::from(term));
    debug!("choose({}, {}) = {}", n, k, result);
    Ok(result)
}

/// Number of multisets of size `k` over `n` categories, `C(n + k - 1, k)`.
///
/// # Errors
///
/// Returns `ArithError::Overflow` when `n + k - 1` does not fit in a `u64`.
pub fn multichoose(n: u64, k: u64) -> Result<BigUint, ArithError> {
    if n == 0 {
        return Ok(BigUint::from(u8::from(k == 0)));
    }
    let slots = (n - 1)
        .checked_add(k)
        .ok_or_else(|| ArithError::Overflow(format!("multichoose({}, {})", n, k)))?;
    choose(slots, k)
}
