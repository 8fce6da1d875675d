// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Set difference and intersection over plain sequences.
//!
//! Inputs are treated as sets: duplicates collapse and every element of the
//! result appears exactly once. Callers should not rely on the order of the
//! result, but it is deterministic: elements are emitted in the order they
//! are first seen, scanning `a` before `b`.

use ahash::HashSet;
use std::hash::Hash;

fn distinct<T>(items: &[T]) -> HashSet<&T>
where
    T: Eq + Hash,
{
    items.iter().collect()
}

/// Returns the elements present in exactly one of `a` and `b`.
///
/// ```rust
/// let diff = idranges::set_difference(&["a", "b", "b", "c"], &["c", "d"]);
/// assert_eq!(diff, ["a", "b", "d"]);
/// ```
#[must_use]
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let (in_a, in_b) = (distinct(a), distinct(b));
    let mut seen = HashSet::default();
    a.iter()
        .filter(|item| !in_b.contains(item))
        .chain(b.iter().filter(|item| !in_a.contains(item)))
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the elements present in both `a` and `b`.
///
/// ```rust
/// let common = idranges::set_intersection(&["a", "b", "b", "c"], &["c", "b"]);
/// assert_eq!(common, ["b", "c"]);
/// ```
#[must_use]
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let in_b = distinct(b);
    let mut seen = HashSet::default();
    a.iter()
        .filter(|item| in_b.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}
