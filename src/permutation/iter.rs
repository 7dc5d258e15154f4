use log::debug;

use crate::permutation::step::next_permutation;

/// Iterator over a sequence and every permutation that follows it in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Option<Vec<T>>,
}

impl<T: Ord + Clone> Permutations<T> {
    /// Starts from `start` as given; pass a sorted sequence to visit every permutation.
    pub fn new(start: Vec<T>) -> Self {
        Self {
            current: Some(start),
        }
    }
}

impl Permutations<usize> {
    /// All `n!` permutations of `0..n`, ending with `[n-1, ..., 0]`.
    pub fn of_range(n: usize) -> Self {
        debug!("Enumerating permutations of 0..{}", n);
        Self::new((0..n).collect())
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.clone();
        if next_permutation(current).is_none() {
            self.current = None;
        }
        Some(item)
    }
}
