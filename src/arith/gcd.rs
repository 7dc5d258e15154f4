use log::debug;
use num_bigint::BigUint;
use num_traits::One;

use crate::arith::errors::ArithError;

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(mut m: u128, mut n: u128) -> u128 {
    while n != 0 {
        let t = n;
        n = m % n;
        m = t;
    }
    m
}

/// Least common multiple. `lcm(0, x)` is 0.
///
/// # Errors
///
/// Returns `ArithError::Overflow` when the result does not fit in a `u128`.
pub fn lcm(m: u128, n: u128) -> Result<u128, ArithError> {
    if m == 0 || n == 0 {
        return Ok(0);
    }
    (m / gcd(m, n))
        .checked_mul(n)
        .ok_or_else(|| ArithError::Overflow(format!("lcm({}, {})", m, n)))
}

pub fn factorial(mut n: u32) -> BigUint {
    debug!("Computing {}!", n);
    let mut result = BigUint::one();
    while n > 1 {
        result *= BigUint::from(n);
        n -= 1;
    }
    result
}
