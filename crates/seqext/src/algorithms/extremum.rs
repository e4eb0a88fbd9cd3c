//! Extremal-index search.
//!
//! ## Purpose
//!
//! This module locates the 0-based position of the maximum or minimum
//! element of a sequence.
//!
//! ## Design notes
//!
//! * **Single pass**: The sequence is consumed exactly once, so one-shot
//!   iterators are accepted.
//! * **First occurrence**: The running best is only replaced on a strict
//!   improvement; ties keep the earliest index.
//! * **Sentinel**: `None` for an empty sequence, or when the position counter
//!   would overflow `usize`.
//!
//! ## Invariants
//!
//! * If `max_index(s) == Some(i)` then `s[i] >= s[j]` for all `j`, and no
//!   `j < i` satisfies `s[j] == s[i]`. Symmetrically for `min_index`.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Natural Order
// ============================================================================

/// Index of the first maximum element.
#[inline]
pub fn max_index<I>(items: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    position_by(items, |candidate, best| candidate > best)
}

/// Index of the first minimum element.
#[inline]
pub fn min_index<I>(items: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    position_by(items, |candidate, best| candidate < best)
}

// ============================================================================
// Custom Order
// ============================================================================

/// Index of the first maximum element under `compare`.
#[inline]
pub fn max_index_by<I, F>(items: I, mut compare: F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    position_by(items, |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

/// Index of the first minimum element under `compare`.
#[inline]
pub fn min_index_by<I, F>(items: I, mut compare: F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    position_by(items, |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

/// Index of the first element with the maximum key.
#[inline]
pub fn max_index_by_key<I, K, F>(items: I, mut key: F) -> Option<usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    max_index(items.into_iter().map(|item| key(&item)))
}

/// Index of the first element with the minimum key.
#[inline]
pub fn min_index_by_key<I, K, F>(items: I, mut key: F) -> Option<usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    min_index(items.into_iter().map(|item| key(&item)))
}

// ============================================================================
// Scan
// ============================================================================

// Linear scan keeping the best element seen so far. `improves(candidate, best)`
// decides replacement.
fn position_by<I, F>(items: I, mut improves: F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = items.into_iter();
    let mut best = iter.next()?;
    let mut best_index = 0usize;
    let mut index = 0usize;

    for item in iter {
        index = index.checked_add(1)?;
        if improves(&item, &best) {
            best = item;
            best_index = index;
        }
    }

    Some(best_index)
}
