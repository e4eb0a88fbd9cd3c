//! High-level extension-trait API.
//!
//! ## Purpose
//!
//! This module exposes every operation of the crate as a method, so
//! sequences read fluently: `scores.iter().max_index()`,
//! `samples.std_dev_sample()`.
//!
//! ## Design notes
//!
//! * **Iterator-based**: [`SequenceExt`] is blanket-implemented for every
//!   `Iterator`. Each method consumes the iterator exactly once.
//! * **Slice-based**: [`StatsExt`] is implemented for `[T]` because the
//!   dispersion statistics traverse their input twice.
//! * **Thin**: Methods forward to the free functions of the algorithm and
//!   math layers, which remain the single source of behaviour.

// External dependencies
use core::cmp::Ordering;
#[cfg(feature = "std")]
use core::hash::Hash;
use num_traits::Float;
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

// Internal dependencies
use crate::algorithms::extremum;
#[cfg(feature = "std")]
use crate::algorithms::frequency;
use crate::math::dispersion;

// Publicly re-exported types
pub use crate::math::sieve::{MAX_SIEVE_CEILING, Sieve, nearest_previous_prime};
pub use crate::primitives::errors::SeqError;

// ============================================================================
// Sequence Extensions
// ============================================================================

/// Extension methods for any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Index of the first maximum element, `None` if empty.
    ///
    /// ```
    /// use seqext::prelude::*;
    ///
    /// assert_eq!([3, 9, 2, 9].iter().max_index(), Some(1));
    /// assert_eq!(Vec::<i32>::new().into_iter().max_index(), None);
    /// ```
    fn max_index(self) -> Option<usize>
    where
        Self::Item: Ord,
    {
        extremum::max_index(self)
    }

    /// Index of the first minimum element, `None` if empty.
    fn min_index(self) -> Option<usize>
    where
        Self::Item: Ord,
    {
        extremum::min_index(self)
    }

    /// Index of the first maximum element under `compare`.
    ///
    /// ```
    /// use seqext::prelude::*;
    ///
    /// let xs = [0.5_f64, 2.5, -1.0, 2.5];
    /// assert_eq!(xs.iter().copied().max_index_by(|a, b| a.total_cmp(b)), Some(1));
    /// ```
    fn max_index_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum::max_index_by(self, compare)
    }

    /// Index of the first minimum element under `compare`.
    fn min_index_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum::min_index_by(self, compare)
    }

    /// Index of the first element with the largest key.
    fn max_index_by_key<K, F>(self, key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum::max_index_by_key(self, key)
    }

    /// Index of the first element with the smallest key.
    fn min_index_by_key<K, F>(self, key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extremum::min_index_by_key(self, key)
    }

    /// Collect into a set of distinct elements.
    #[cfg(feature = "std")]
    fn to_unique_set(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        frequency::to_unique_set(self)
    }

    /// Number of distinct elements.
    #[cfg(feature = "std")]
    fn distinct_count(self) -> usize
    where
        Self::Item: Eq + Hash,
    {
        frequency::distinct_count(self)
    }

    /// Occurrence count of every distinct element.
    #[cfg(feature = "std")]
    fn frequencies(self) -> HashMap<Self::Item, usize>
    where
        Self::Item: Eq + Hash,
    {
        frequency::frequencies(self)
    }

    /// The mode. Ties are broken arbitrarily; `None` if empty.
    ///
    /// ```
    /// use seqext::prelude::*;
    ///
    /// assert_eq!([1, 1, 2, 2, 2, 3].into_iter().most_common(), Some(2));
    /// ```
    #[cfg(feature = "std")]
    fn most_common(self) -> Option<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        frequency::most_common(self)
    }
}

impl<I: Iterator> SequenceExt for I {}

// ============================================================================
// Statistics Extensions
// ============================================================================

/// Dispersion statistics over a slice of floats.
///
/// The unchecked methods follow IEEE-754: undefined results are NaN.
pub trait StatsExt<T> {
    /// Arithmetic mean. NaN when empty.
    fn mean(&self) -> T;

    /// Population variance (divisor `n`). NaN when empty.
    fn variance_population(&self) -> T;

    /// Sample variance (divisor `n - 1`). NaN for fewer than two values.
    fn variance_sample(&self) -> T;

    /// Population standard deviation. NaN when empty.
    ///
    /// ```
    /// use seqext::prelude::*;
    ///
    /// assert_eq!([5.0_f64, 5.0, 5.0, 5.0].std_dev_population(), 0.0);
    /// assert!(Vec::<f64>::new().std_dev_population().is_nan());
    /// ```
    fn std_dev_population(&self) -> T;

    /// Sample standard deviation. NaN for fewer than two values.
    fn std_dev_sample(&self) -> T;

    /// Population standard deviation, rejecting empty or non-finite input.
    fn try_std_dev_population(&self) -> Result<T, SeqError>;

    /// Sample standard deviation, rejecting short or non-finite input.
    fn try_std_dev_sample(&self) -> Result<T, SeqError>;
}

impl<T: Float> StatsExt<T> for [T] {
    #[inline]
    fn mean(&self) -> T {
        dispersion::mean(self)
    }

    #[inline]
    fn variance_population(&self) -> T {
        dispersion::variance_population(self)
    }

    #[inline]
    fn variance_sample(&self) -> T {
        dispersion::variance_sample(self)
    }

    #[inline]
    fn std_dev_population(&self) -> T {
        dispersion::std_dev_population(self)
    }

    #[inline]
    fn std_dev_sample(&self) -> T {
        dispersion::std_dev_sample(self)
    }

    fn try_std_dev_population(&self) -> Result<T, SeqError> {
        dispersion::try_std_dev_population(self)
    }

    fn try_std_dev_sample(&self) -> Result<T, SeqError> {
        dispersion::try_std_dev_sample(self)
    }
}
