use thiserror::Error;

/// Errors that can occur in integer arithmetic helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    #[error("Invalid argument: k={k} exceeds n={n}")]
    InvalidArgument { n: u64, k: u64 },
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),
    #[error("Divisor {divisor} left uncancelled while computing choose({n}, {k})")]
    InexactCancellation { n: u64, k: u64, divisor: u128 },
}
