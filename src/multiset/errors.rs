use thiserror::Error;

use crate::combination::CombinationError;

/// Errors raised when building a multiset from malformed input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MultiSetError {
    #[error("Cannot place {k} items into zero categories")]
    EmptyCategories { k: usize },
    #[error("Bars must be strictly increasing, violated at position {position}: {bars:?}")]
    BarsNotIncreasing { position: usize, bars: Vec<usize> },
    #[error("Bar {bar} is outside the {slots} available slots")]
    BarOutOfRange { bar: usize, slots: usize },
    #[error("Bars account for {used} items but the multiset only has {k}")]
    Overfull { k: usize, used: usize },
    #[error("Flat multiset must be sorted, violated at position {position}")]
    UnsortedFlat { position: usize },
    #[error("Category {category} is out of range for n={n}")]
    CategoryOutOfRange { category: usize, n: usize },
    #[error("Combination error: {0}")]
    CombinationError(#[from] CombinationError),
}
