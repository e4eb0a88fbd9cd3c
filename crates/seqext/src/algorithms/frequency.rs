//! Frequency analysis: unique sets, distinct counts and the mode.
//!
//! ## Purpose
//!
//! This module groups the elements of a sequence by value equality and
//! derives the set of distinct values, their number, and the most common one.
//!
//! ## Design notes
//!
//! * **Hash-based**: Elements need `Eq + Hash`; no ordering is required.
//! * **Unspecified ties**: When several values share the highest count,
//!   [`most_common`] returns whichever the hash table yields first. The
//!   result may differ between runs and callers must not rely on it.
//!
//! ## Non-goals
//!
//! * This module does not preserve insertion order.

// External dependencies
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

/// Collect `source` into a set holding each distinct element once.
#[inline]
pub fn to_unique_set<I>(source: I) -> HashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    source.into_iter().collect()
}

/// Number of distinct elements in `source`. Zero when empty.
#[inline]
pub fn distinct_count<I>(source: I) -> usize
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    to_unique_set(source).len()
}

/// Occurrence count of every distinct element.
pub fn frequencies<I>(source: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut counts = HashMap::new();
    for item in source {
        *counts.entry(item).or_insert(0usize) += 1;
    }
    counts
}

/// A representative of the largest group of equal elements.
///
/// `None` for an empty sequence. Tie-breaking is unspecified.
pub fn most_common<I>(source: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    frequencies(source)
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(item, _)| item)
}
