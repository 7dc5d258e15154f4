use thiserror::Error;

/// Errors raised for malformed combination input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombinationError {
    #[error("Invalid argument: k={k} exceeds n={n}")]
    KExceedsN { n: usize, k: usize },
    #[error("Combination is not strictly increasing at position {position}: {values:?}")]
    NotStrictlyIncreasing { position: usize, values: Vec<usize> },
    #[error("Combination element {value} is out of range for n={n}")]
    OutOfRange { value: usize, n: usize },
}
