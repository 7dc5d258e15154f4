/// Rearranges `a` into the next permutation in lexicographic order.
///
/// Returns `None` and leaves `a` untouched when it is already the last
/// permutation (non-increasing). Repeated elements are allowed.
pub fn next_permutation<T: Ord>(a: &mut [T]) -> Option<&[T]> {
    let pivot = a
        .windows(2)
        .rposition(|pair| matches!(pair, [left, right] if left < right))?;

    // Rightmost element greater than the pivot; a[pivot + 1] qualifies, so it
    // always lies in the suffix.
    let pivot_value = a.get(pivot)?;
    let successor = a.iter().rposition(|value| value > pivot_value)?;

    a.swap(pivot, successor);
    a.get_mut(pivot + 1..)?.reverse();
    Some(&*a)
}
