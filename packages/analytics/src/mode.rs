//! Frequency counting with a pinned tie-break policy.
//!
//! The mode's tie-break is externally observable, so it is spelled out
//! here instead of delegating to a library: when two values occur equally
//! often, the one encountered first in table order wins.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Returns the most frequent value, ties broken by first occurrence in
/// iteration order. Returns `None` for an empty iterator.
#[must_use]
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(_, (count, first))| (count, Reverse(first)))
        .map(|(value, _)| value)
}

/// Returns `(value, count)` pairs in descending count order, ties broken
/// by first occurrence in iteration order.
#[must_use]
pub fn value_counts<T, I>(values: I) -> Vec<(T, u64)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    let mut pairs: Vec<(T, (u64, usize))> = counts.into_iter().collect();
    pairs.sort_by_key(|&(_, (count, first))| (Reverse(count), first));
    pairs
        .into_iter()
        .map(|(value, (count, _))| (value, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_most_frequent_value() {
        assert_eq!(mode([3, 3, 3, 5]), Some(3));
        assert_eq!(mode(["a", "b", "b", "c"]), Some("b"));
    }

    #[test]
    fn breaks_ties_by_first_occurrence() {
        assert_eq!(mode([5, 3, 3, 5]), Some(5));
        assert_eq!(mode([3, 5, 5, 3]), Some(3));
        assert_eq!(mode(["x", "y"]), Some("x"));
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert_eq!(mode(std::iter::empty::<u32>()), None);
    }

    #[test]
    fn counts_descend_with_first_occurrence_ties() {
        let counts = value_counts(["b", "a", "a", "c", "b", "a"]);
        assert_eq!(
            counts,
            vec![("a", 3), ("b", 2), ("c", 1)],
        );

        // "y" and "z" both occur twice; "y" appeared first.
        let tied = value_counts(["y", "z", "z", "y", "x"]);
        assert_eq!(tied, vec![("y", 2), ("z", 2), ("x", 1)]);
    }
}
