//! Thin sequence utilities.
//!
//! Pass-throughs over standard slice facilities, kept for the callers that
//! want a uniform vocabulary next to the pair queries. Copying, reversing,
//! sorting, and shuffling are deliberately not re-wrapped: `to_vec`,
//! `[T]::reverse`, `sort_unstable`, and
//! [`RandomProvider::shuffle`](crate::util::RandomProvider::shuffle) already
//! are that vocabulary.

/// Linear membership scan.
pub fn contains<T: PartialEq>(values: &[T], needle: &T) -> bool {
    values.contains(needle)
}

/// Position of the first occurrence of `needle`.
pub fn index_of<T: PartialEq>(values: &[T], needle: &T) -> Option<usize> {
    values.iter().position(|value| value == needle)
}

/// Number of occurrences of `needle`.
pub fn count_occurrence<T: PartialEq>(values: &[T], needle: &T) -> usize {
    values.iter().filter(|value| *value == needle).count()
}

/// Distinct values in ascending order.
pub fn unique<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

/// New vector holding `left` followed by `right`.
pub fn concat<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(left);
    out.extend_from_slice(right);
    out
}
