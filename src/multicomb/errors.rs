use thiserror::Error;

use crate::combination::CombinationError;

/// Errors that can occur while setting up a multi-level enumeration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MultiCombError {
    #[error(
        "Insufficient remaining universe: level {level} needs {k} elements but only {remaining} remain"
    )]
    InsufficientUniverse {
        level: usize,
        k: usize,
        remaining: usize,
    },
    #[error("Level cannot choose {k} elements from a lut of {available}")]
    LutTooShort { k: usize, available: usize },
    #[error("Universe must be strictly increasing: {0:?}")]
    UnsortedUniverse(Vec<usize>),
    #[error("Combination error: {0}")]
    CombinationError(#[from] CombinationError),
}
