use num_bigint::BigUint;

use crate::arith::{ArithError, choose, factorial, gcd, lcm, multichoose};

fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

fn parse_big(digits: &str) -> Option<BigUint> {
    digits.parse().ok()
}

#[test]
fn test_gcd_basic() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(gcd(9, 0), 9);
    assert_eq!(gcd(0, 0), 0);
}

#[test]
fn test_lcm_basic() {
    assert_eq!(lcm(4, 6), Ok(12));
    assert_eq!(lcm(0, 6), Ok(0));
    assert_eq!(lcm(7, 13), Ok(91));
}

#[test]
fn test_lcm_overflow() {
    let result = lcm(u128::MAX, u128::MAX - 1);
    assert!(matches!(result, Err(ArithError::Overflow(_))));
}

#[test]
fn test_factorial_small() {
    assert_eq!(factorial(0), big(1));
    assert_eq!(factorial(1), big(1));
    assert_eq!(factorial(5), big(120));
    assert_eq!(factorial(20), big(2_432_902_008_176_640_000));
}

#[test]
fn test_factorial_beyond_machine_words() {
    assert_eq!(
        Some(factorial(40)),
        parse_big("815915283247897734345611269596115894272000000000")
    );
    assert_eq!(factorial(41), factorial(40) * BigUint::from(41u32));
}

#[test]
fn test_choose_small_values() {
    assert_eq!(choose(4, 2), Ok(big(6)));
    assert_eq!(choose(5, 2), Ok(big(10)));
    assert_eq!(choose(10, 3), Ok(big(120)));
    assert_eq!(choose(0, 0), Ok(big(1)));
    assert_eq!(choose(7, 0), Ok(big(1)));
    assert_eq!(choose(7, 7), Ok(big(1)));
}

#[test]
fn test_choose_rejects_k_above_n() {
    assert_eq!(
        choose(3, 4),
        Err(ArithError::InvalidArgument { n: 3, k: 4 })
    );
}

#[test]
fn test_choose_symmetry() {
    for n in 0..40u64 {
        for k in 0..=n {
            assert_eq!(choose(n, k), choose(n, n - k), "n={}, k={}", n, k);
        }
    }
}

#[test]
fn test_choose_pascal_rule() {
    for n in 1..80u64 {
        for k in 1..n {
            let lhs = choose(n, k);
            let rhs = match (choose(n - 1, k - 1), choose(n - 1, k)) {
                (Ok(a), Ok(b)) => Ok(a + b),
                (Err(e), _) | (_, Err(e)) => Err(e),
            };
            assert_eq!(lhs, rhs, "n={}, k={}", n, k);
        }
    }
}

#[test]
fn test_choose_large_exact() {
    assert_eq!(choose(60, 30), Ok(big(118_264_581_564_861_424)));
    assert_eq!(
        choose(100, 50).ok(),
        parse_big("100891344545564193334812497256")
    );
    assert_eq!(
        choose(200, 100).ok(),
        parse_big("90548514656103281165404177077484163874504589675413336841320")
    );
}

#[test]
fn test_choose_matches_factorial_ratio() {
    for n in 0..=30u32 {
        for k in 0..=n {
            let expected = factorial(n) / (factorial(k) * factorial(n - k));
            assert_eq!(choose(u64::from(n), u64::from(k)), Ok(expected));
        }
    }
}

#[test]
fn test_multichoose() {
    assert_eq!(multichoose(3, 2), Ok(big(6)));
    assert_eq!(multichoose(1, 5), Ok(big(1)));
    assert_eq!(multichoose(4, 0), Ok(big(1)));
    assert_eq!(multichoose(0, 0), Ok(big(1)));
    assert_eq!(multichoose(0, 3), Ok(big(0)));
    assert!(matches!(
        multichoose(u64::MAX, 2),
        Err(ArithError::Overflow(_))
    ));
}
